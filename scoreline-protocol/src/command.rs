//! Command tokens accepted on the wireless link

/// A recognized wireless command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `P1+`
    Player1Up,
    /// `P2+`
    Player2Up,
    /// `P1-`
    Player1Down,
    /// `P2-`
    Player2Down,
    /// `RESET`
    Reset,
}

// Wire tokens
const TOKEN_PLAYER1_UP: &str = "P1+";
const TOKEN_PLAYER2_UP: &str = "P2+";
const TOKEN_PLAYER1_DOWN: &str = "P1-";
const TOKEN_PLAYER2_DOWN: &str = "P2-";
const TOKEN_RESET: &str = "RESET";

impl Command {
    /// Every command, in the order they are listed in help text
    pub const ALL: [Command; 5] = [
        Command::Player1Up,
        Command::Player2Up,
        Command::Player1Down,
        Command::Player2Down,
        Command::Reset,
    ];

    /// Parse a received line
    ///
    /// Leading and trailing whitespace is ignored. The remaining text must be
    /// exactly one of the tokens; case matters and there is no prefix match.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            TOKEN_PLAYER1_UP => Some(Command::Player1Up),
            TOKEN_PLAYER2_UP => Some(Command::Player2Up),
            TOKEN_PLAYER1_DOWN => Some(Command::Player1Down),
            TOKEN_PLAYER2_DOWN => Some(Command::Player2Down),
            TOKEN_RESET => Some(Command::Reset),
            _ => None,
        }
    }

    /// Wire token for this command
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Player1Up => TOKEN_PLAYER1_UP,
            Command::Player2Up => TOKEN_PLAYER2_UP,
            Command::Player1Down => TOKEN_PLAYER1_DOWN,
            Command::Player2Down => TOKEN_PLAYER2_DOWN,
            Command::Reset => TOKEN_RESET,
        }
    }
}
