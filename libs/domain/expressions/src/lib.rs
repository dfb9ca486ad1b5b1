// [libs/domain/expressions/src/lib.rs]
/*!
 * =================================================================
 * APARATO: URL EXPRESSION GENERATOR (ESTRATO L2 - DOMAIN)
 * RESPONSABILIDAD: CANONICALIZAR UNA URL Y ENUMERAR SUS EXPRESIONES
 *
 * Convierte una URL arbitraria en el conjunto finito y acotado de
 * fragmentos host+path que deben hashearse y buscarse, siguiendo el
 * procedimiento de la especificación de safe-browsing: sufijos de
 * host (tope de 5 etiquetas) por prefijos de ruta (tope de 4 + ruta
 * completa con query).
 * =================================================================
 */

use std::net::Ipv4Addr;
use std::str::FromStr;

use once_cell::sync::Lazy;
use publicsuffix::{List, Psl};
use thiserror::Error;

/// Lista de sufijos públicos embebida en el binario — ver `src/data/public_suffix_list.dat`.
static PUBLIC_SUFFIX_LIST: Lazy<List> = Lazy::new(|| {
    List::from_str(include_str!("data/public_suffix_list.dat"))
        .expect("la lista de sufijos públicos embebida debe parsear")
});

/// Errores al canonicalizar una URL o generar sus expresiones.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("invalid or unparsable url: {0}")]
    InvalidInput(String),
}

/// Genera el conjunto (con posibles duplicados) de expresiones `host+path[?query]`
/// para `raw_url`, listas para hashear y buscar en la base local.
pub fn generate_expressions(raw_url: &str) -> Result<Vec<String>, ExpressionError> {
    let parsed = url::Url::parse(raw_url)
        .map_err(|e| ExpressionError::InvalidInput(format!("{raw_url}: {e}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ExpressionError::InvalidInput(format!("{raw_url}: missing host")))?;

    let mut path = parsed.path().to_string();
    if path.is_empty() {
        path = "/".to_string();
    }
    let query = parsed.query().unwrap_or("").to_string();

    let canonical_host = canonicalize_hostname(host);
    let base_domain = effective_tld_plus_one(&canonical_host);

    let host_suffixes = generate_host_suffixes(&canonical_host, &base_domain);
    let path_prefixes = generate_path_prefixes(&path, &query);

    let mut expressions = Vec::with_capacity(host_suffixes.len() * path_prefixes.len());
    for suffix in &host_suffixes {
        for prefix in &path_prefixes {
            expressions.push(format!("{suffix}{prefix}"));
        }
    }
    Ok(expressions)
}

/// Limpia un hostname crudo: recorta puntos al inicio/fin, colapsa corridas de
/// puntos repetidos a uno solo, y normaliza a minúsculas.
#[must_use]
pub fn canonicalize_hostname(host: &str) -> String {
    let lowered = host.to_ascii_lowercase();
    let trimmed = lowered.trim_matches('.');

    let mut collapsed = String::with_capacity(trimmed.len());
    let mut last_was_dot = false;
    for ch in trimmed.chars() {
        if ch == '.' {
            if !last_was_dot {
                collapsed.push(ch);
            }
            last_was_dot = true;
        } else {
            collapsed.push(ch);
            last_was_dot = false;
        }
    }
    collapsed
}

/// Calcula el dominio base (eTLD+1) de un hostname ya canonicalizado.
///
/// Direcciones IPv4 son su propia base (un único sufijo de host resultará).
/// Si la lista de sufijos públicos no reconoce ninguna etiqueta del host
/// como sufijo registrable, el propio host se usa como base — produciendo,
/// igual que el caso IP, un único sufijo de host.
#[must_use]
pub fn effective_tld_plus_one(canonical_host: &str) -> String {
    if canonical_host.parse::<Ipv4Addr>().is_ok() {
        return canonical_host.to_string();
    }

    match PUBLIC_SUFFIX_LIST.domain(canonical_host.as_bytes()) {
        Some(domain) => String::from_utf8_lossy(domain.as_bytes()).into_owned(),
        None => canonical_host.to_string(),
    }
}

/// Genera los sufijos de host desde `canonical_host` hacia `base_domain`,
/// siempre incluyendo el host completo y, para las posiciones intermedias,
/// solo aquellas cuyo número de etiquetas restantes no exceda 5.
#[must_use]
pub fn generate_host_suffixes(canonical_host: &str, base_domain: &str) -> Vec<String> {
    let parts: Vec<&str> = canonical_host.split('.').collect();
    let base_parts: Vec<&str> = base_domain.split('.').collect();

    if base_parts.len() > parts.len() {
        return vec![canonical_host.to_string()];
    }

    let last_index = parts.len() - base_parts.len();
    let mut suffixes = Vec::new();
    for i in 0..=last_index {
        let remaining = parts.len() - i;
        if i == 0 || remaining <= 5 {
            suffixes.push(parts[i..].join("."));
        }
    }
    suffixes
}

/// Genera los prefijos de ruta: variante con query, ruta completa, raíz, y
/// hasta tres prefijos de directorio intermedios con barra final.
#[must_use]
pub fn generate_path_prefixes(path: &str, query: &str) -> Vec<String> {
    let mut prefixes = Vec::new();

    if !query.is_empty() {
        prefixes.push(format!("{path}?{query}"));
    }

    prefixes.push(path.to_string());

    if path != "/" {
        prefixes.push("/".to_string());
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let intermediate_count = std::cmp::min(segments.len(), 4).saturating_sub(1);

    let mut running = String::from("/");
    for segment in segments.iter().take(intermediate_count) {
        running.push_str(segment);
        running.push('/');
        if running != path && !prefixes.contains(&running) {
            prefixes.push(running.clone());
        }
    }

    prefixes
}
