// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - |v| >= 1e10 ou 0 < |v| < 1e-10 : notation scientifique façon printf "%e"
// - sinon : arrondi à `decimales` chiffres, entier affiché sans ".0"

/// Au-delà : notation scientifique.
pub const SEUIL_HAUT: f64 = 1e10;
/// En deçà (hors zéro) : notation scientifique.
pub const SEUIL_BAS: f64 = 1e-10;

/// Formate `valeur` pour l’écran de la calculatrice.
///
/// Exemples (8 décimales) :
///   11.0        => "11"
///   1.0 / 3.0   => "0.33333333"
///   2.5e10      => "2.500000e+10"
pub fn formater_nombre(valeur: f64, decimales: usize) -> String {
    let abs = valeur.abs();
    if abs >= SEUIL_HAUT || (abs < SEUIL_BAS && valeur != 0.0) {
        return format_scientifique(valeur);
    }

    let arrondi = arrondir(valeur, decimales);
    if arrondi == 0.0 {
        // évite "-0"
        return "0".to_string();
    }
    if arrondi.fract() == 0.0 {
        // |arrondi| < 1e10 : tient dans un i64
        return format!("{}", arrondi as i64);
    }
    format!("{arrondi}")
}

/// Arrondi au plus proche, milieu loin de zéro.
fn arrondir(valeur: f64, decimales: usize) -> f64 {
    let facteur = 10f64.powi(decimales.min(i32::MAX as usize) as i32);
    let r = (valeur * facteur).round() / facteur;
    if r.is_finite() {
        r
    } else {
        valeur
    }
}

/// "%e" : mantisse à 6 décimales, exposant signé sur au moins 2 chiffres.
fn format_scientifique(valeur: f64) -> String {
    if !valeur.is_finite() {
        return format!("{valeur}");
    }

    // Rust produit "1.234568e10" / "1.000000e-11"
    let brut = format!("{valeur:.6e}");
    let (mantisse, exposant) = match brut.split_once('e') {
        Some(parts) => parts,
        None => return brut,
    };

    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(c) => ('-', c),
        None => ('+', exposant),
    };

    format!("{mantisse}e{signe}{chiffres:0>2}")
}
