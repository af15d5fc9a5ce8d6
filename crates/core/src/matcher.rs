use crate::store::Store;

/// A record found by [`find`], with its position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub description: String,
    pub command: String,
    pub position: usize,
}

/// Case-insensitive substring search over descriptions and commands.
///
/// An empty term matches every record. Matches keep store order.
#[must_use]
pub fn find(store: &Store, term: &str) -> Vec<Match> {
    let term = term.to_lowercase();

    store
        .records()
        .filter(|(_, record)| {
            term.is_empty()
                || record.description.to_lowercase().contains(&term)
                || record.command.to_lowercase().contains(&term)
        })
        .map(|(position, record)| Match {
            description: record.description.clone(),
            command: record.command.clone(),
            position,
        })
        .collect()
}
