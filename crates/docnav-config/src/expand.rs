//! `${VAR}` expansion in configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// `${VAR}` must be set. `${VAR:-default}` falls back to `default`.
/// Bare `$VAR` is left as-is, so URLs containing `$` survive untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    let lookup = |var: &str| std::env::var(var).map(Some);

    match shellexpand::env_with_context(&escaped, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        }),
    }
}

/// Double every `$` outside a `${...}` span.
///
/// shellexpand reads `$$` as a literal `$`, so only braced references are
/// left for expansion.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 4);
    let mut rest = value;

    while let Some(dollar) = rest.find('$') {
        escaped.push_str(&rest[..dollar]);
        rest = &rest[dollar..];

        if rest.starts_with("${")
            && let Some(close) = rest.find('}')
        {
            escaped.push_str(&rest[..=close]);
            rest = &rest[close + 1..];
        } else {
            escaped.push_str("$$");
            rest = &rest[1..];
        }
    }

    escaped.push_str(rest);
    escaped
}
