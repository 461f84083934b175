use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    NewGame,
    JoinGame(JoinGameCommand),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JoinGameCommand {
    pub game_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// The server put us into a game, freshly created or joined.
    GameJoined(GameJoinedMessage),
    Error(ErrorMessage),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameJoinedMessage {
    pub game_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&Command::NewGame).unwrap(),
            r#"{"cmd":"new_game"}"#
        );
        let cmd = Command::JoinGame(JoinGameCommand {
            game_id: "abc123".into(),
        });
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"cmd":"join_game","game_id":"abc123"}"#
        );
    }

    #[test]
    fn game_joined_message_parses() {
        let message: Message =
            serde_json::from_str(r#"{"type":"game_joined","game_id":"abc123"}"#).unwrap();
        match message {
            Message::GameJoined(data) => assert_eq!(data.game_id, "abc123"),
            _ => panic!("wrong message"),
        }
    }
}
