// src/noyau/rpn.rs
//
// Infixe -> RPN (shunting-yard)
// Objectif:
// - Normaliser le texte saisi (glyphes × ÷, moins unaire)
// - Produire la suite postfixée de jetons texte
//
// Règles:
// - chiffre, '.' ou exposant ("e", "e+", "e-") : accumulé dans le littéral courant
// - '(' : empilée, jamais émise
// - ')' : dépile jusqu’à '(' ; ')' orpheline tolérée (aucune erreur)
// - opérateur : dépile tant que priorité(sommet) >= priorité(entrant)
//
// NOTE:
// - Comparaison `>=` pour TOUS les opérateurs, y compris '^' :
//   2^3^2 se lit (2^3)^2. Pas d’associativité à droite ici.
// - L’exposant sert à relire un résultat affiché en notation scientifique
//   ("9.999890e+10") quand on enchaîne un calcul dessus.

use log::debug;

use super::symboles::{est_operateur, Operateur};

/// Priorité d’un caractère d’opérateur. Caractère inconnu => 0
/// (ne domine jamais, sera dépilé en fin de lecture).
pub fn priorite(c: char) -> u8 {
    Operateur::depuis_char(c).map_or(0, Operateur::priorite)
}

/// Normalise l’infixe saisi :
/// - × -> *, ÷ -> /
/// - insère "0" devant un '-' en tête ou juste après '(' (moins unaire => 0 - x)
/// - un '-' juste après un opérateur enveloppe son opérande : "5*-3" => "5*(0-3)"
///   L’opérande court jusqu’à la fin de la chaîne de '^' qui le suit :
///   "3*-2^2" => "3*(0-2^2)", comme "-2^2" => "0-2^2".
///
/// Exemple:
///   "-(-2)×3"  =>  "0-(0-2)*3"
pub fn normaliser(texte: &str) -> String {
    let mut out = String::with_capacity(texte.len() + 8);
    let mut precedent: Option<char> = None;
    let mut litteral = String::new();

    // profondeur de parenthèses (texte d’origine) + moins unaires à refermer
    let mut profondeur: usize = 0;
    let mut fermetures: Vec<usize> = Vec::new();

    for c in texte.chars() {
        let c = match c {
            '×' => '*',
            '÷' => '/',
            _ => c,
        };

        if prolonge_litteral(&litteral, c) {
            litteral.push(c);
            out.push(c);
            precedent = Some(c);
            continue;
        }

        // opérande complet (littéral ou groupe) : sauf si '^' le prolonge
        let fin_operande = !litteral.is_empty() || precedent == Some(')');
        if fin_operande && c != '^' {
            refermer(&mut out, &mut fermetures, profondeur);
        }
        litteral.clear();

        match c {
            '-' if matches!(precedent, None | Some('(')) => {
                out.push('0');
                out.push('-');
            }
            '-' if precedent.is_some_and(est_operateur) => {
                out.push_str("(0-");
                fermetures.push(profondeur);
            }
            '(' => {
                profondeur += 1;
                out.push('(');
            }
            ')' => {
                out.push(')');
                profondeur = profondeur.saturating_sub(1);
            }
            _ => out.push(c),
        }
        precedent = Some(c);
    }

    // reste : tout ce qui est encore ouvert par un moins unaire
    for _ in fermetures.drain(..) {
        out.push(')');
    }

    out
}

/// `c` prolonge-t-il le littéral `courant` ?
/// Chiffres et '.', puis un exposant éventuel : "1.5e-3", "9.999890e+10".
fn prolonge_litteral(courant: &str, c: char) -> bool {
    match c {
        '0'..='9' | '.' => true,
        'e' => !courant.is_empty() && !courant.contains('e'),
        '+' | '-' => courant.ends_with('e'),
        _ => false,
    }
}

fn refermer(out: &mut String, fermetures: &mut Vec<usize>, profondeur: usize) {
    while fermetures.last() == Some(&profondeur) {
        fermetures.pop();
        out.push(')');
    }
}

/// Convertit un infixe (normalisé) en RPN.
///
/// Exemple:
///   "3+4*2"  =>  ["3", "4", "2", "*", "+"]
pub fn infixe_vers_rpn(texte: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut ops: Vec<char> = Vec::new();
    let mut litteral = String::new();

    for c in texte.chars() {
        match c {
            c if prolonge_litteral(&litteral, c) => litteral.push(c),

            '(' => {
                vider_litteral(&mut litteral, &mut out);
                ops.push(c);
            }

            ')' => {
                vider_litteral(&mut litteral, &mut out);
                // dépile jusqu’à '(' (la parenthèse elle-même est jetée)
                while let Some(top) = ops.pop() {
                    if top == '(' {
                        break;
                    }
                    out.push(top.to_string());
                }
            }

            _ => {
                vider_litteral(&mut litteral, &mut out);
                let p = priorite(c);
                while let Some(&top) = ops.last() {
                    if top == '(' || priorite(top) < p {
                        break;
                    }
                    out.push(top.to_string());
                    ops.pop();
                }
                ops.push(c);
            }
        }
    }

    vider_litteral(&mut litteral, &mut out);

    // vide la pile ops ; une '(' non fermée est silencieusement jetée
    while let Some(op) = ops.pop() {
        if op != '(' {
            out.push(op.to_string());
        }
    }

    debug!("rpn: {texte:?} -> {}", out.join(" "));
    out
}

fn vider_litteral(litteral: &mut String, out: &mut Vec<String>) {
    if !litteral.is_empty() {
        out.push(std::mem::take(litteral));
    }
}
