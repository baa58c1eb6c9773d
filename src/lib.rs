//! Bíblia TUI (biblia-tui)
//!
//! Terminal reader for the Bible in Portuguese, bundling the Almeida
//! Atualizada, Almeida Corrigida Fiel and Nova Versão Internacional
//! translations.
//!
//! This is the library root. The crate follows a Pure Core / Impure Shell
//! architecture: the corpus and every state machine (navigation, search,
//! share selection) are pure and synchronous, while terminal IO, the
//! clipboard and the filesystem live in the view and config shells.

pub mod config;
pub mod corpus;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
