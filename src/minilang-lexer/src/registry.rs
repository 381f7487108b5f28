use indexmap::IndexMap;
use log::debug;

/// Fixed lexeme -> id bindings for keywords and punctuation, in id order.
pub const RESERVED: [(&str, u32); 11] = [
    ("int", 0),
    ("main", 1),
    ("(", 2),
    (")", 3),
    ("begin", 4),
    (",", 6),
    ("=", 8),
    (";", 11),
    ("while", 12),
    ("+", 14),
    ("end", 15),
];

/// First id handed out to an identifier or number literal.
pub const FIRST_DYNAMIC_ID: u32 = 16;

/// Id of a reserved lexeme, if it is one.
pub fn reserved_id(lexeme: &str) -> Option<u32> {
    RESERVED
        .iter()
        .find(|(reserved, _)| *reserved == lexeme)
        .map(|&(_, id)| id)
}

/// Lexeme -> id mapping for a single tokenization run.
///
/// Seeded with [`RESERVED`]. Identifiers and number literals are added on first
/// sight with ids counting up from [`FIRST_DYNAMIC_ID`]. Entries are never
/// removed or rebound, so iteration order is ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRegistry {
    ids: IndexMap<String, u32>,
    next_id: u32,
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdRegistry {
    pub fn new() -> Self {
        let ids = RESERVED
            .iter()
            .map(|&(lexeme, id)| (lexeme.to_string(), id))
            .collect();
        Self {
            ids,
            next_id: FIRST_DYNAMIC_ID,
        }
    }

    pub fn get(&self, lexeme: &str) -> Option<u32> {
        reserved_id(lexeme).or_else(|| self.ids.get(lexeme).copied())
    }

    /// Returns the id bound to `lexeme`, binding the next free id first if
    /// the lexeme has not been seen in this run.
    pub fn intern(&mut self, lexeme: &str) -> u32 {
        if let Some(id) = self.get(lexeme) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(lexeme.to_string(), id);
        debug!("assigned id {id} to {lexeme:?}");
        id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All bindings, reserved ones included, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ids.iter().map(|(lexeme, &id)| (lexeme.as_str(), id))
    }

    /// Bindings added during the run (identifiers and number literals).
    pub fn identifiers(&self) -> impl Iterator<Item = (&str, u32)> {
        self.iter().filter(|&(_, id)| id >= FIRST_DYNAMIC_ID)
    }
}
