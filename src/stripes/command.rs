/// 對外公開的條紋指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeCommand {
    Enable,
    Disable,
}

impl StripeCommand {
    pub const ALL: [StripeCommand; 2] = [StripeCommand::Enable, StripeCommand::Disable];

    pub fn id(self) -> &'static str {
        match self {
            StripeCommand::Enable => "striping.enable",
            StripeCommand::Disable => "striping.disable",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StripeCommand::Enable => "Enable line stripes",
            StripeCommand::Disable => "Disable line stripes",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.iter().copied().find(|command| command.id() == id)
    }
}
