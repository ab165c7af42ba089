// src/noyau/saisie.rs
//
// Saisie incrémentale de l’expression (machine à états).
//
// Contrats :
// - appliquer() est totale : toute touche, depuis tout état, donne un état suivant.
// - Une touche invalide pour l’état courant est un no-op (état inchangé).
// - `ouvertes` == nombre de '(' non fermées dans le texte en saisie, à tout instant,
//   et vaut 0 hors saisie.
// - Aucune erreur ne sort d’ici : un échec d’évaluation donne `Indefini`.

use log::{debug, trace};

use super::eval::{evaluer_infixe, Demarche};
use super::format::formater_nombre;
use super::symboles::{est_operateur, Operateur, Symbole};

/// Précision par défaut du résultat (décimales).
pub const PRECISION_DEFAUT: usize = 8;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const PRECISION_MAX: usize = 15;

/// Texte affiché quand l’évaluation échoue (conservé tel quel, non traduit).
pub const TEXTE_INDEFINI: &str = "Не определено";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EtatExpression {
    /// Rien saisi ; affiche "0".
    #[default]
    Vide,
    /// Expression en cours ; texte jamais vide.
    Saisie(String),
    /// Résultat formaté de la dernière évaluation.
    Resultat(String),
    /// Dernière évaluation en échec.
    Indefini,
}

impl EtatExpression {
    /// Texte principal de l’écran.
    pub fn texte(&self) -> &str {
        match self {
            EtatExpression::Vide => "0",
            EtatExpression::Saisie(t) | EtatExpression::Resultat(t) => t,
            EtatExpression::Indefini => TEXTE_INDEFINI,
        }
    }
}

/// Transition pure : (état, parenthèses ouvertes, touche) -> (état, parenthèses ouvertes).
///
/// Le résultat éventuel est formaté avec PRECISION_DEFAUT décimales.
pub fn appliquer(
    etat: &EtatExpression,
    ouvertes: usize,
    symbole: Symbole,
) -> (EtatExpression, usize) {
    let (etat, ouvertes, _demarche) = transition(etat, ouvertes, symbole, PRECISION_DEFAUT);
    (etat, ouvertes)
}

fn transition(
    etat: &EtatExpression,
    ouvertes: usize,
    symbole: Symbole,
    decimales: usize,
) -> (EtatExpression, usize, Option<Demarche>) {
    use EtatExpression::*;

    let expr = match etat {
        Saisie(t) => Some(t.as_str()),
        _ => None,
    };

    let suivant = match symbole {
        Symbole::ToutEffacer => Some((Vide, 0)),

        Symbole::RetourArriere => Some(match expr {
            Some(e) => retour_arriere(e, ouvertes),
            None => (Vide, 0),
        }),

        Symbole::Chiffre(d) => match char::from_digit(u32::from(d), 10) {
            Some(c) => match expr {
                Some(e) => ajouter_chiffre(e, c).map(|t| (Saisie(t), ouvertes)),
                None => Some((Saisie(c.to_string()), 0)),
            },
            None => None,
        },

        Symbole::Point => match expr {
            Some(e) => ajouter_point(e).map(|t| (Saisie(t), ouvertes)),
            None => Some((Saisie("0.".to_string()), 0)),
        },

        Symbole::Operateur(op) => {
            let g = op.glyphe();
            match etat {
                Indefini => Some((Saisie(format!("0{g}")), 0)),
                Vide if op == Operateur::Moins => Some((Saisie(g.to_string()), 0)),
                Vide => Some((Saisie(format!("0{g}")), 0)),
                Resultat(v) => Some((Saisie(format!("{v}{g}")), 0)),
                Saisie(e) => inserer_operateur(e, op).map(|t| (Saisie(t), ouvertes)),
            }
        }

        Symbole::ParentheseOuvrante => Some(match expr {
            Some(e) => (Saisie(ouvrir_parenthese(e)), ouvertes + 1),
            None => (Saisie("(".to_string()), 1),
        }),

        Symbole::ParentheseFermante => match expr {
            Some(e) if ouvertes > 0 => {
                fermer_parenthese(e).map(|t| (Saisie(t), ouvertes - 1))
            }
            _ => None,
        },

        Symbole::Egal => {
            return match expr {
                Some(e) => match evaluer(e, ouvertes, decimales) {
                    Some((etat, demarche)) => (etat, 0, Some(demarche)),
                    None => rejet(etat, ouvertes, symbole),
                },
                None => rejet(etat, ouvertes, symbole),
            };
        }
    };

    match suivant {
        Some((etat_suivant, n)) => {
            trace!("{symbole}: {:?} -> {:?} (ouvertes={n})", etat, etat_suivant);
            (etat_suivant, n, None)
        }
        None => rejet(etat, ouvertes, symbole),
    }
}

fn rejet(
    etat: &EtatExpression,
    ouvertes: usize,
    symbole: Symbole,
) -> (EtatExpression, usize, Option<Demarche>) {
    debug!("touche ignorée: {symbole} sur {:?}", etat);
    (etat.clone(), ouvertes, None)
}

/* ------------------------ Règles par touche ------------------------ */

/// Nombre courant : suffixe après le dernier opérateur.
/// Le signe d’un exposant ("e+", "e-") fait partie du nombre.
fn nombre_courant(expr: &str) -> &str {
    let coupure = expr
        .char_indices()
        .rev()
        .find(|&(i, c)| est_operateur(c) && !expr[..i].ends_with('e'));
    match coupure {
        Some((i, c)) => &expr[i + c.len_utf8()..],
        None => expr,
    }
}

/// Littéral en fin de texte : suite finale de chiffres et de '.'.
fn litteral_final(expr: &str) -> &str {
    let debut = expr
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_digit() || c == '.')
        .last()
        .map_or(expr.len(), |(i, _)| i);
    &expr[debut..]
}

fn ajouter_chiffre(expr: &str, c: char) -> Option<String> {
    // zéro nu en fin de texte : un second zéro est ignoré
    if c == '0' && litteral_final(expr) == "0" {
        return None;
    }
    // seul le "0" initial est remplacé ("5+0" puis 3 => "5+03")
    if expr == "0" {
        return Some(c.to_string());
    }
    Some(format!("{expr}{c}"))
}

fn ajouter_point(expr: &str) -> Option<String> {
    if nombre_courant(expr).contains('.') {
        return None;
    }
    match expr.chars().last() {
        Some(last) if last == '(' || est_operateur(last) => Some(format!("{expr}0.")),
        _ => Some(format!("{expr}.")),
    }
}

/// Saisie d’un opérateur binaire en fin d’expression.
///
/// Ne regarde que les deux derniers caractères et la touche entrante :
/// - après '('          : seul '-' est accepté
/// - après un chiffre   : ajout
/// - après "×-" / "÷-"  : '-' refusé, tout autre opérateur remplace les deux
/// - après × ÷ ^        : '-' s’ajoute (moins unaire)
/// - après "(-"         : un autre opérateur annule le '-'
/// - après un opérateur : remplacement
/// - sinon              : ajout
fn inserer_operateur(expr: &str, op: Operateur) -> Option<String> {
    let g = op.glyphe();
    let moins = op == Operateur::Moins;

    let mut fin = expr.chars().rev();
    let last = match fin.next() {
        Some(c) => c,
        None => return Some(g.to_string()),
    };
    let avant = fin.next();

    if last == '(' {
        return moins.then(|| format!("{expr}{g}"));
    }
    if last.is_ascii_digit() {
        return Some(format!("{expr}{g}"));
    }

    let sans = |n: usize| -> String {
        let mut t = expr.to_string();
        for _ in 0..n {
            t.pop();
        }
        t
    };

    if last == '-' && avant.is_some_and(|a| matches!(a, '*' | '×' | '/' | '÷')) {
        if moins {
            return None;
        }
        return Some(format!("{}{g}", sans(2)));
    }

    if est_operateur(last) {
        if moins && matches!(last, '*' | '×' | '/' | '÷' | '^') {
            return Some(format!("{expr}{g}"));
        }
        if !moins && last == '-' && avant == Some('(') {
            // annule le moins unaire en attente, sans rien poser à la place
            return Some(sans(1));
        }
        return Some(format!("{}{g}", sans(1)));
    }

    Some(format!("{expr}{g}"))
}

fn ouvrir_parenthese(expr: &str) -> String {
    if expr == "0" {
        return "(".to_string();
    }
    match expr.chars().last() {
        Some(last) if last.is_ascii_digit() || last == ')' => {
            format!("{expr}{}(", Operateur::Fois.glyphe())
        }
        _ => format!("{expr}("),
    }
}

fn fermer_parenthese(expr: &str) -> Option<String> {
    match expr.chars().last() {
        Some(last) if last == '(' || est_operateur(last) => None,
        _ => Some(format!("{expr})")),
    }
}

fn retour_arriere(expr: &str, ouvertes: usize) -> (EtatExpression, usize) {
    if expr.chars().count() <= 1 {
        return (EtatExpression::Vide, 0);
    }

    let mut t = expr.to_string();
    let ouvertes = match t.pop() {
        Some('(') => ouvertes.saturating_sub(1),
        // la ')' retirée rouvre son groupe
        Some(')') => ouvertes + 1,
        _ => ouvertes,
    };

    if t.is_empty() {
        (EtatExpression::Vide, 0)
    } else {
        (EtatExpression::Saisie(t), ouvertes)
    }
}

/// "=" : ferme les groupes en attente, évalue, formate.
///
/// `None` si l’expression compte moins de deux chiffres (rien à calculer).
fn evaluer(
    expr: &str,
    ouvertes: usize,
    decimales: usize,
) -> Option<(EtatExpression, Demarche)> {
    if expr.chars().filter(char::is_ascii_digit).count() < 2 {
        return None;
    }

    let mut texte = expr.to_string();
    if texte.chars().last().is_some_and(est_operateur) {
        texte.pop();
    }
    texte.extend(std::iter::repeat(')').take(ouvertes));

    let (valeur, demarche) = evaluer_infixe(&texte);
    let etat = match valeur {
        Ok(v) => EtatExpression::Resultat(formater_nombre(v, decimales)),
        Err(_) => EtatExpression::Indefini,
    };
    Some((etat, demarche))
}

/* ------------------------ Session ------------------------ */

/// Session de calcul : état + compteur de parenthèses + réglages.
#[derive(Clone, Debug)]
pub struct Calculatrice {
    etat: EtatExpression,
    ouvertes: usize,
    decimales: usize,
    derniere_demarche: Option<Demarche>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_precision(PRECISION_DEFAUT)
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Précision bornée à PRECISION_MAX.
    pub fn avec_precision(decimales: usize) -> Self {
        Self {
            etat: EtatExpression::Vide,
            ouvertes: 0,
            decimales: decimales.min(PRECISION_MAX),
            derniere_demarche: None,
        }
    }

    pub fn set_precision(&mut self, decimales: usize) {
        self.decimales = decimales.min(PRECISION_MAX);
    }

    pub fn precision(&self) -> usize {
        self.decimales
    }

    /// Applique une touche.
    pub fn saisir(&mut self, symbole: Symbole) {
        let (etat, ouvertes, demarche) =
            transition(&self.etat, self.ouvertes, symbole, self.decimales);
        self.etat = etat;
        self.ouvertes = ouvertes;
        if demarche.is_some() {
            self.derniere_demarche = demarche;
        }
    }

    /// Applique une touche donnée par son étiquette ; `false` si inconnue.
    pub fn saisir_touche(&mut self, touche: &str) -> bool {
        match Symbole::depuis_touche(touche) {
            Some(s) => {
                self.saisir(s);
                true
            }
            None => false,
        }
    }

    pub fn etat(&self) -> &EtatExpression {
        &self.etat
    }

    pub fn parentheses_ouvertes(&self) -> usize {
        self.ouvertes
    }

    pub fn texte_affiche(&self) -> &str {
        self.etat.texte()
    }

    /// Les ')' implicites, rendues en plus clair par l’affichage.
    pub fn parentheses_en_attente(&self) -> String {
        ")".repeat(self.ouvertes)
    }

    /// Vrai pendant la saisie (la touche AC devient alors un retour arrière).
    pub fn est_en_saisie(&self) -> bool {
        matches!(self.etat, EtatExpression::Saisie(_))
    }

    pub fn derniere_demarche(&self) -> Option<&Demarche> {
        self.derniere_demarche.as_ref()
    }
}
