/// Path prefixes reachable without a principal.
///
/// A prefix matches itself and everything below it, never a sibling that
/// merely shares the leading characters (`/authors` is not under `/auth`).
const PUBLIC_PREFIXES: [&str; 5] = [
    "/auth",
    "/swagger-ui",
    "/v3/api-docs",
    "/swagger-resources",
    "/webjars",
];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public("/auth/login"));
        assert!(is_public("/auth/register"));
        assert!(is_public("/auth"));
        assert!(is_public("/swagger-ui/index.html"));
        assert!(is_public("/v3/api-docs"));
        assert!(is_public("/webjars/x.js"));
    }

    #[test]
    fn test_everything_else_is_protected() {
        assert!(!is_public("/followed"));
        assert!(!is_public("/followed/user"));
        assert!(!is_public("/users/info"));
        assert!(!is_public("/authors"));
        assert!(!is_public("/"));
    }
}
