// src/noyau/symboles.rs
//
// Alphabet des touches de la calculatrice.
// - Symbole   : une entrée discrète (chiffre, opérateur, parenthèse, ...)
// - Operateur : les cinq opérateurs binaires + leur priorité
//
// Deux écritures coexistent dans le texte saisi :
// - glyphes d’affichage : × et ÷ (ce que voit l’utilisateur)
// - forme canonique     : * et / (ce que lit le convertisseur RPN)
// est_operateur() reconnaît les deux.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    /// Glyphe inséré dans l’expression affichée.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Puissance => '^',
        }
    }

    /// Caractère canonique (après normalisation).
    pub fn canonique(self) -> char {
        match self {
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            autre => autre.glyphe(),
        }
    }

    /// Accepte les deux écritures (× ou *, ÷ ou /).
    pub fn depuis_char(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    /// Priorité shunting-yard : + - = 1, * / = 2, ^ = 3.
    pub fn priorite(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphe())
    }
}

/// Prédicat : `c` est-il un opérateur binaire (glyphe ou canonique) ?
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

/// Une touche de la calculatrice. Aucune donnée au-delà de son identité.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbole {
    Chiffre(u8), // 0..=9
    Operateur(Operateur),
    ParentheseOuvrante,
    ParentheseFermante,
    Point,
    Egal,
    ToutEffacer,
    RetourArriere,
}

impl Symbole {
    /// Construit un chiffre ; `None` hors de 0..=9.
    pub fn chiffre(d: u8) -> Option<Symbole> {
        (d <= 9).then_some(Symbole::Chiffre(d))
    }

    /// Traduit une étiquette de touche (ou un caractère tapé au clavier).
    ///
    /// Étiquettes reconnues : "0".."9", "+", "-", "×"/"*", "÷"/"/", "^",
    /// "(", ")", ".", "=", "AC", "⌫"/"DEL".
    pub fn depuis_touche(touche: &str) -> Option<Symbole> {
        match touche {
            "AC" => return Some(Symbole::ToutEffacer),
            "⌫" | "DEL" => return Some(Symbole::RetourArriere),
            _ => {}
        }

        let mut chars = touche.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if let Some(d) = c.to_digit(10) {
            return Some(Symbole::Chiffre(d as u8));
        }
        if let Some(op) = Operateur::depuis_char(c) {
            return Some(Symbole::Operateur(op));
        }
        match c {
            '(' => Some(Symbole::ParentheseOuvrante),
            ')' => Some(Symbole::ParentheseFermante),
            '.' | ',' => Some(Symbole::Point),
            '=' => Some(Symbole::Egal),
            _ => None,
        }
    }

    pub fn est_operateur(self) -> bool {
        matches!(self, Symbole::Operateur(_))
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbole::Chiffre(d) => write!(f, "{d}"),
            Symbole::Operateur(op) => write!(f, "{op}"),
            Symbole::ParentheseOuvrante => write!(f, "("),
            Symbole::ParentheseFermante => write!(f, ")"),
            Symbole::Point => write!(f, "."),
            Symbole::Egal => write!(f, "="),
            Symbole::ToutEffacer => write!(f, "AC"),
            Symbole::RetourArriere => write!(f, "⌫"),
        }
    }
}
