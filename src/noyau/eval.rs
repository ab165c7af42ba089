//! Noyau — évaluation (pipeline réel)
//!
//! infixe -> normalisation -> RPN -> pile de valeurs -> nombre | erreur
//!
//! Remarques :
//! - division par zéro : erreur immédiate (état indéfini côté saisie)
//! - pile vide en fin de lecture : 0 (repli permissif, pas une erreur)

use std::str::FromStr;

use log::debug;
use num_traits::Float;

use super::erreurs::ErreurEval;
use super::rpn::{infixe_vers_rpn, normaliser};

/// Trace d’une évaluation (affichée par l’appelant s’il le souhaite).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub infixe: String,
    pub normalise: String,
    pub rpn: Vec<String>,
}

impl Demarche {
    /// RPN sous forme de texte : "3 4 2 * +".
    pub fn rpn_texte(&self) -> String {
        self.rpn.join(" ")
    }
}

/// Évalue une suite RPN en f64.
pub fn evaluer_rpn(jetons: &[String]) -> Result<f64, ErreurEval> {
    evaluer_rpn_en::<f64>(jetons)
}

/// Évalue une suite RPN dans n’importe quel flottant.
///
/// - un jeton lisible comme nombre est empilé
/// - un opérateur (+ - * / ^) dépile `a` (dernier empilé) puis `b` et empile `b OP a`
/// - tout autre jeton est ignoré
pub fn evaluer_rpn_en<F>(jetons: &[String]) -> Result<F, ErreurEval>
where
    F: Float + FromStr,
{
    let mut pile: Vec<F> = Vec::with_capacity(jetons.len());

    for jeton in jetons {
        if let Ok(x) = jeton.parse::<F>() {
            pile.push(x);
            continue;
        }

        let op = match operateur_seul(jeton) {
            Some(op) => op,
            None => continue,
        };

        let (a, b) = match (pile.pop(), pile.pop()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ErreurEval::OperandesManquantes { operateur: op }),
        };

        let r = match op {
            '+' => b + a,
            '-' => b - a,
            '*' => b * a,
            '/' => {
                if a == F::zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                b / a
            }
            _ => b.powf(a), // '^'
        };
        pile.push(r);
    }

    Ok(pile.last().copied().unwrap_or_else(F::zero))
}

/// Refuse tout jeton qui n’est ni un nombre ni un opérateur
/// ("9.9e" d’un exposant tronqué, '.' isolé, caractère inconnu).
fn verifier_jetons(jetons: &[String]) -> Result<(), ErreurEval> {
    match jetons
        .iter()
        .find(|j| j.parse::<f64>().is_err() && operateur_seul(j).is_none())
    {
        Some(j) => Err(ErreurEval::JetonInvalide { jeton: j.to_string() }),
        None => Ok(()),
    }
}

/// Jeton d’un seul caractère parmi + - * / ^.
fn operateur_seul(jeton: &str) -> Option<char> {
    let mut chars = jeton.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ ('+' | '-' | '*' | '/' | '^')), None) => Some(c),
        _ => None,
    }
}

/// API publique : évalue un infixe saisi (glyphes × ÷ acceptés).
///
/// Retourne la valeur (ou l’erreur) ET la démarche, même en cas d’échec.
/// NaN / ±∞ sont refusés (ErreurEval::ResultatNonFini), de même qu’un jeton
/// illisible (ErreurEval::JetonInvalide) : jamais de valeur silencieusement fausse.
pub fn evaluer_infixe(infixe: &str) -> (Result<f64, ErreurEval>, Demarche) {
    let normalise = normaliser(infixe);
    let rpn = infixe_vers_rpn(&normalise);

    debug!("infixe: {infixe:?} | normalisé: {normalise:?} | rpn: {}", rpn.join(" "));

    let valeur = verifier_jetons(&rpn)
        .and_then(|()| evaluer_rpn(&rpn))
        .and_then(|v| {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ErreurEval::ResultatNonFini)
            }
        });

    match &valeur {
        Ok(v) => debug!("résultat: {v}"),
        Err(e) => debug!("échec: {e}"),
    }

    let demarche = Demarche {
        infixe: infixe.to_string(),
        normalise,
        rpn,
    };
    (valeur, demarche)
}
