// src/noyau/format.rs

/* ------------------------ Affichage d’une valeur calculée ------------------------ */

/// Formate une valeur pour l’écran :
/// - entier mathématique => sans partie fractionnaire ("8", pas "8.0")
/// - sinon au plus `decimales` chiffres après le point, zéros finaux retirés
/// - séparateur '.' quelle que soit la locale
/// - jamais de "-0"
pub fn formater_nombre(x: f64, decimales: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    // Au-delà de 2^53 tout f64 est entier : on passe toujours par ici.
    if x.fract() == 0.0 {
        return format!("{x:.0}");
    }

    let brut = format!("{x:.decimales$}");
    let s = retirer_zeros_finaux(&brut);

    // -0.00000000001 arrondi à 10 décimales
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn retirer_zeros_finaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Représentation décimale stockée dans l’entrée : sans exposant, relisible par `parse::<f64>()`.
pub fn vers_entree(x: f64) -> String {
    x.to_string()
}
