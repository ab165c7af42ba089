// src/noyau/erreurs.rs
//
// Échecs d’évaluation. Ils ne sortent jamais du noyau :
// la saisie les convertit en état « indéfini ».

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérandes manquants pour '{operateur}'")]
    OperandesManquantes { operateur: char },

    #[error("résultat non fini (dépassement ou NaN)")]
    ResultatNonFini,

    #[error("jeton illisible '{jeton}'")]
    JetonInvalide { jeton: String },
}
