use std::env;

#[derive(Default, Debug, Clone, Copy)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Resolves the runtime environment. Debug builds default to `Development`,
/// release builds to `Production`; the `ENV` variable overrides either.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => match v.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}
