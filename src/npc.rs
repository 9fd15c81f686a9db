//! NPC dialogue as plain data.
//!
//! Dialogue is a fixed prompt -> response mapping with index-based
//! selection. The core never blocks on input: the caller gathers a
//! choice however it likes (menu, script, test) and passes it in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub prompt: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub description: String,
    lines: Vec<DialogueLine>,
}

impl Npc {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            lines: Vec::new(),
        }
    }

    /// Registers a prompt/response pair. A repeated prompt overwrites
    /// the earlier response in place.
    pub fn add_dialogue(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        let prompt = prompt.into();
        let response = response.into();
        match self.lines.iter_mut().find(|line| line.prompt == prompt) {
            Some(line) => line.response = response,
            None => self.lines.push(DialogueLine { prompt, response }),
        }
    }

    pub fn has_dialogue(&self) -> bool {
        !self.lines.is_empty()
    }

    /// The prompts the player can pick from, in registration order.
    pub fn options(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.prompt.as_str()).collect()
    }

    /// Response for the 0-based choice. Out-of-range is the "walk away"
    /// path and returns `None`.
    pub fn respond(&self, choice: usize) -> Option<&str> {
        self.lines.get(choice).map(|line| line.response.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elder() -> Npc {
        let mut npc = Npc::new("Village Elder", "A shifty old man");
        npc.add_dialogue("Greet him", "Welcome, traveler");
        npc.add_dialogue("Ask about work", "The forest crawls with beasts. Help me?");
        npc.add_dialogue("Ask about the herb", "Deep in the forest grows a herb. Bring me some.");
        npc
    }

    #[test]
    fn test_options_in_registration_order() {
        let npc = elder();
        assert_eq!(
            npc.options(),
            ["Greet him", "Ask about work", "Ask about the herb"]
        );
    }

    #[test]
    fn test_respond_by_index() {
        let npc = elder();
        assert_eq!(npc.respond(0), Some("Welcome, traveler"));
        assert_eq!(
            npc.respond(2),
            Some("Deep in the forest grows a herb. Bring me some.")
        );
    }

    #[test]
    fn test_out_of_range_choice_walks_away() {
        let npc = elder();
        assert_eq!(npc.respond(3), None);
        assert_eq!(Npc::new("Mute", "says nothing").respond(0), None);
    }

    #[test]
    fn test_repeated_prompt_overwrites_response() {
        let mut npc = elder();
        npc.add_dialogue("Greet him", "You again?");
        assert_eq!(npc.options().len(), 3);
        assert_eq!(npc.respond(0), Some("You again?"));
    }
}
