//! Noyau de la calculatrice RPN
//!
//! Organisation interne :
//! - symboles.rs : alphabet des touches + prédicat opérateur
//! - rpn.rs      : normalisation + shunting-yard (infixe -> RPN)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - erreurs.rs  : échecs d’évaluation
//! - format.rs   : affichage d’un nombre
//! - saisie.rs   : machine à états de la saisie + session

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod rpn;
pub mod saisie;
pub mod symboles;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurEval;
pub use eval::{evaluer_infixe, evaluer_rpn, Demarche};
pub use format::formater_nombre;
pub use rpn::{infixe_vers_rpn, normaliser};
pub use saisie::{appliquer, Calculatrice, EtatExpression, TEXTE_INDEFINI};
pub use symboles::{est_operateur, Operateur, Symbole};
