use yew::format::Json;
use yew::services::websocket::{WebSocketService, WebSocketStatus, WebSocketTask};
use yew::{html, Callback, Component, ComponentLink, Html, Properties, ShouldRender};

use crate::protocol::{Command, JoinGameCommand, Message};

#[derive(Debug)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

#[derive(Clone, Properties)]
pub struct Props {
    pub host: String,
    pub game_id: String,
    pub on_game_id_assigned: Callback<String>,
}

/// Root component of the embedded chess application.
///
/// The bootstrap hands it the websocket endpoint and the game id from
/// the address bar. On connect it either asks the server for a fresh
/// game or joins the one from the URL, and reports the id the server
/// settled on through `on_game_id_assigned`.
pub struct ChessApp {
    ws: WebSocketTask,
    ws_service: WebSocketService,
    state: ConnectionState,
    host: String,
    game_id: String,
    on_game_id_assigned: Callback<String>,
}

pub enum Msg {
    ServerMessage(Message),
    Connected,
    ConnectionLost,
    Ignore,
}

impl Component for ChessApp {
    type Message = Msg;
    type Properties = Props;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        log::info!("Connecting to {}", &props.host);
        let on_message = link.callback(|Json(data)| match data {
            Ok(message) => Msg::ServerMessage(message),
            Err(err) => {
                log::error!("websocket error: {:?}", err);
                Msg::Ignore
            }
        });
        let on_notification = link.callback(|status| match status {
            WebSocketStatus::Opened => Msg::Connected,
            WebSocketStatus::Closed | WebSocketStatus::Error => Msg::ConnectionLost,
        });
        let mut ws_service = WebSocketService::new();
        let ws = ws_service
            .connect(&props.host, on_message, on_notification)
            .unwrap();

        ChessApp {
            ws,
            ws_service,
            state: ConnectionState::Connecting,
            host: props.host,
            game_id: props.game_id,
            on_game_id_assigned: props.on_game_id_assigned,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            Msg::Connected => {
                self.state = ConnectionState::Connected;
                if self.game_id.is_empty() {
                    log::info!("Requesting a new game");
                    self.ws.send(Json(&Command::NewGame));
                } else {
                    log::info!("Joining game {}", &self.game_id);
                    self.ws.send(Json(&Command::JoinGame(JoinGameCommand {
                        game_id: self.game_id.clone(),
                    })));
                }
            }
            Msg::ServerMessage(message) => {
                log::debug!("Server message: {:?}", &message);
                match message {
                    Message::GameJoined(data) => {
                        self.game_id = data.game_id.clone();
                        self.on_game_id_assigned.emit(data.game_id);
                    }
                    Message::Error(err) => {
                        log::error!("server error: {}", err.message);
                    }
                }
            }
            Msg::ConnectionLost => {
                log::info!("Lost connection on web socket!");
                self.state = ConnectionState::Disconnected;
            }
            Msg::Ignore => {}
        }
        true
    }

    fn view(&self) -> Html {
        html! {
            <div class="chess">
                <p>{ self.status_line() }</p>
                <div id="chess-board"></div>
            </div>
        }
    }
}

impl ChessApp {
    fn status_line(&self) -> String {
        match self.state {
            ConnectionState::Connecting => format!("Connecting to {}...", self.host),
            ConnectionState::Connected if self.game_id.is_empty() => {
                "Waiting for a game...".to_string()
            }
            ConnectionState::Connected => format!("In game {}", self.game_id),
            ConnectionState::Disconnected => "Connection lost".to_string(),
        }
    }
}
