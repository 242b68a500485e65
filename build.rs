use std::env;
use std::fs;
use std::path::Path;

// Variables que config.rs lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "APPLY_DESIGN_PATH",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "SUGGESTION_LIMIT",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=Sin archivo .env: se usan los valores por defecto de config.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for (key, value) in parse_env(&contents) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// Parsea líneas KEY=VALUE, ignorando comentarios y comillas
fn parse_env(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim().trim_matches('"')))
        .collect()
}
