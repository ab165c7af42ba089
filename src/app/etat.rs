//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session du noyau (Calculatrice) + les réglages d’affichage,
//! et offrir des actions simples sans logique de dessin.
//!
//! Contrats :
//! - Aucune règle de saisie ici : tout passe par `Calculatrice::saisir`.
//! - Garde-fou : précision bornée par le noyau.

use calculatrice_rpn::noyau::saisie::PRECISION_DEFAUT;
use calculatrice_rpn::noyau::{Calculatrice, Symbole};

/// La précision n’est pas dupliquée ici : `calc.precision()` fait foi.
#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::avec_precision(PRECISION_DEFAUT),
        }
    }
}

impl AppCalc {
    /// Une touche du pavé (ou du clavier).
    pub fn touche(&mut self, symbole: Symbole) {
        self.calc.saisir(symbole);
    }

    /// AC : remise à zéro de la saisie.
    pub fn tout_effacer(&mut self) {
        self.calc.saisir(Symbole::ToutEffacer);
    }

    /// Touche AC dynamique : retour arrière pendant la saisie, AC sinon.
    pub fn touche_effacer(&mut self) {
        if self.calc.est_en_saisie() {
            self.calc.saisir(Symbole::RetourArriere);
        } else {
            self.tout_effacer();
        }
    }

    pub fn etiquette_effacer(&self) -> &'static str {
        if self.calc.est_en_saisie() {
            "DEL"
        } else {
            "AC"
        }
    }

    /// Garde-fou : la précision effective est celle retenue par le noyau.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.calc.set_precision(decimales);
    }
}
