//! Calculatrice RPN — bibliothèque
//!
//! Le noyau (saisie touche par touche, conversion RPN, évaluation) est
//! utilisable sans l’interface : chaque appel reçoit son propre état,
//! aucun état global.

pub mod noyau;
