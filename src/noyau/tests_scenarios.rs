//! Scénarios de bout en bout : suites de touches telles qu’un utilisateur les tape.
//!
//! Chaque test part d’une session neuve (ou d’un état donné) et vérifie
//! le texte affiché + le compteur de parenthèses.

use pretty_assertions::assert_eq;

use super::eval::evaluer_infixe;
use super::rpn::{infixe_vers_rpn, normaliser};
use super::saisie::{appliquer, Calculatrice, EtatExpression, TEXTE_INDEFINI};
use super::symboles::{Operateur, Symbole};

fn session(touches: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::new();
    for t in touches {
        assert!(c.saisir_touche(t), "touche inconnue: {t:?}");
    }
    c
}

fn saisie(t: &str) -> EtatExpression {
    EtatExpression::Saisie(t.to_string())
}

#[test]
fn aller_retour_rpn() {
    let rpn = infixe_vers_rpn(&normaliser("3+4*2"));
    assert_eq!(rpn, vec!["3", "4", "2", "*", "+"]);
    assert_eq!(evaluer_infixe("3+4*2").0, Ok(11.0));

    let c = session(&["3", "+", "4", "×", "2", "="]);
    assert_eq!(c.texte_affiche(), "11");
}

#[test]
fn division_par_zero_puis_chiffre() {
    let mut c = session(&["5", "÷", "0", "="]);
    assert_eq!(c.etat(), &EtatExpression::Indefini);
    assert_eq!(c.texte_affiche(), TEXTE_INDEFINI);

    c.saisir(Symbole::Chiffre(7));
    assert_eq!(c.etat(), &saisie("7"));
}

#[test]
fn indefini_puis_operateur() {
    let mut c = session(&["5", "÷", "0", "="]);
    c.saisir(Symbole::Operateur(Operateur::Plus));
    assert_eq!(c.etat(), &saisie("0+"));
}

#[test]
fn multiplication_implicite() {
    assert_eq!(
        appliquer(&saisie("4"), 0, Symbole::ParentheseOuvrante),
        (saisie("4×("), 1)
    );

    let c = session(&["4", "(", "2", "+", "1", "="]);
    assert_eq!(c.texte_affiche(), "12");
}

#[test]
fn remplacement_operateur() {
    assert_eq!(
        appliquer(&saisie("5+"), 0, Symbole::Operateur(Operateur::Fois)),
        (saisie("5×"), 0)
    );
}

#[test]
fn zeros_de_tete_supprimes() {
    let c = session(&["0", "0"]);
    assert_eq!(c.etat(), &saisie("0"));
}

#[test]
fn moins_unaire_apres_operateur() {
    let mut c = session(&["5", "×"]);
    c.saisir(Symbole::Operateur(Operateur::Moins));
    assert_eq!(c.etat(), &saisie("5×-"));
    c.saisir(Symbole::Chiffre(3));
    assert_eq!(c.etat(), &saisie("5×-3"));
    c.saisir(Symbole::Egal);
    assert_eq!(c.texte_affiche(), "-15");

    assert_eq!(evaluer_infixe("5*-3").0, Ok(-15.0));
}

#[test]
fn retour_arriere_aux_limites() {
    let mut c = session(&["7", "⌫"]);
    assert_eq!(c.etat(), &EtatExpression::Vide);
    c.saisir(Symbole::RetourArriere);
    assert_eq!(c.etat(), &EtatExpression::Vide);
}

#[test]
fn moins_unaire_de_tete() {
    let c = session(&["-", "5", "+", "2", "="]);
    assert_eq!(c.texte_affiche(), "-3");
}

#[test]
fn moins_apres_parenthese() {
    let c = session(&["2", "(", "-", "3", ")", "="]);
    assert_eq!(c.texte_affiche(), "-6");
}

#[test]
fn resultat_reutilise() {
    let c = session(&["1", "2", "+", "3", "=", "×", "2", "="]);
    assert_eq!(c.texte_affiche(), "30");
}

#[test]
fn resultat_decimal_reutilise() {
    let c = session(&["1", "÷", "4", "=", "+", "1", "="]);
    assert_eq!(c.texte_affiche(), "1.25");
}

#[test]
fn puissance_gauche_a_droite() {
    let c = session(&["2", "^", "3", "^", "2", "="]);
    assert_eq!(c.texte_affiche(), "64");
}

#[test]
fn decimaux() {
    let c = session(&[".", "5", "+", "1", ".", "2", "5", "="]);
    assert_eq!(c.texte_affiche(), "1.75");
}

#[test]
fn grand_resultat_scientifique() {
    let c = session(&["9", "9", "9", "9", "9", "×", "9", "9", "9", "9", "9", "9", "="]);
    assert_eq!(c.texte_affiche(), "9.999890e+10");
}

#[test]
fn enchainement_sur_resultat_scientifique() {
    let mut c = session(&["9", "9", "9", "9", "9", "×", "9", "9", "9", "9", "9", "9", "="]);
    for t in ["+", "1", "="] {
        assert!(c.saisir_touche(t));
    }
    assert_eq!(c.texte_affiche(), "9.999890e+10");
    assert_eq!(
        c.derniere_demarche().map(|d| d.rpn_texte()),
        Some("9.999890e+10 1 +".to_string())
    );

    for t in ["×", "2", "="] {
        assert!(c.saisir_touche(t));
    }
    assert_eq!(c.texte_affiche(), "1.999978e+11");
}

#[test]
fn enchainement_sur_petit_resultat() {
    let mut c = session(&["1", "÷", "1", "0", "^", "1", "1", "="]);
    assert_eq!(c.texte_affiche(), "1.000000e-11");
    for t in ["×", "2", "="] {
        assert!(c.saisir_touche(t));
    }
    assert_eq!(c.texte_affiche(), "2.000000e-11");
}

#[test]
fn exposant_tronque_indefini() {
    // retour arrière jusqu’à "9.999890e" : jamais une valeur fausse
    let mut c = session(&["9", "9", "9", "9", "9", "×", "9", "9", "9", "9", "9", "9", "="]);
    assert!(c.saisir_touche("+"));
    assert_eq!(c.etat(), &saisie("9.999890e+10+"));
    for _ in 0..4 {
        c.saisir(Symbole::RetourArriere);
    }
    assert_eq!(c.etat(), &saisie("9.999890e"));
    c.saisir(Symbole::Egal);
    assert_eq!(c.etat(), &EtatExpression::Indefini);
}

#[test]
fn moins_unaire_et_puissance() {
    let c = session(&["-", "2", "^", "2", "="]);
    assert_eq!(c.texte_affiche(), "-4");
    let c = session(&["3", "×", "-", "2", "^", "2", "="]);
    assert_eq!(c.texte_affiche(), "-12");
}

#[test]
fn zero_initial_apres_operateur() {
    let c = session(&["5", "+", "0", "3"]);
    assert_eq!(c.etat(), &saisie("5+03"));
    let c = session(&["5", "+", "0", "3", "="]);
    assert_eq!(c.texte_affiche(), "8");
}

#[test]
fn depassement_indefini() {
    let c = session(&["1", "0", "^", "4", "0", "0", "="]);
    assert_eq!(c.etat(), &EtatExpression::Indefini);
}

#[test]
fn parentheses_en_attente_affichees() {
    let c = session(&["(", "(", "1", "+", "2", ")"]);
    assert_eq!(c.texte_affiche(), "((1+2)");
    assert_eq!(c.parentheses_en_attente(), ")");
}

#[test]
fn demarche_apres_egal() {
    let c = session(&["-", "2", "×", "(", "3", "="]);
    assert_eq!(c.texte_affiche(), "-6");
    let d = c.derniere_demarche().expect("démarche");
    assert_eq!(d.infixe, "-2×(3)");
    assert_eq!(d.normalise, "0-2*(3)");
    assert_eq!(d.rpn_texte(), "0 2 3 * -");
}
