use super::{CommanderId, Experience, FactionId, Points, StatLine, UnitDef};

/// A playable nationality with its commanders and unit lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactionDef {
    pub id: FactionId,
    pub name: String,
    pub description: String,
    pub commanders: Vec<CommanderDef>,
    /// Units that form the mandatory backbone of a force.
    pub core: Vec<UnitDef>,
    /// Units capped at one per two core units.
    pub support: Vec<UnitDef>,
    pub force_rules: Vec<String>,
    pub allies: Vec<String>,
}

impl FactionDef {
    pub fn new(id: impl Into<FactionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_commander(mut self, commander: CommanderDef) -> Self {
        self.commanders.push(commander);
        self
    }

    pub fn with_core(mut self, unit: UnitDef) -> Self {
        self.core.push(unit);
        self
    }

    pub fn with_support(mut self, unit: UnitDef) -> Self {
        self.support.push(unit);
        self
    }
}

/// Personal options a commander may buy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CommanderOptionKind {
    /// The commander rides.
    Mount,
    /// The commander is upgraded to veteran.
    Veteran,
}

impl CommanderOptionKind {
    pub const DEFAULT_POINTS: Points = 4;

    pub const fn title(self) -> &'static str {
        match self {
            Self::Mount => "Mount Commander",
            Self::Veteran => "Upgrade to Veteran",
        }
    }
}

/// A purchasable commander option with its price carried as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommanderOption {
    pub kind: CommanderOptionKind,
    #[cfg_attr(feature = "serde", serde(default = "default_option_points"))]
    pub points: Points,
}

#[cfg(feature = "serde")]
fn default_option_points() -> Points {
    CommanderOptionKind::DEFAULT_POINTS
}

impl CommanderOption {
    pub const fn new(kind: CommanderOptionKind, points: Points) -> Self {
        Self { kind, points }
    }

    /// Display label, e.g. `Mount Commander (+4 pts)`.
    pub fn label(&self) -> String {
        format!("{} ({:+} pts)", self.kind.title(), self.points)
    }
}

impl From<CommanderOptionKind> for CommanderOption {
    fn from(kind: CommanderOptionKind) -> Self {
        Self::new(kind, CommanderOptionKind::DEFAULT_POINTS)
    }
}

/// A commander selection and the data needed to price it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommanderDef {
    pub id: CommanderId,
    pub name: String,
    pub points: Points,
    pub stats: StatLine,
    pub experience: Experience,
    /// Command range in inches.
    pub command_range: u8,
    pub command_points: u8,
    pub composition: String,
    /// Cavalry support units count as core under this commander.
    pub is_cavalry_commander: bool,
    /// Named attachment joining another unit; buys no unit upgrades.
    pub is_attachment: bool,
    /// Naval officer; buys no unit upgrades.
    pub is_navy: bool,
    pub options: Vec<CommanderOption>,
    /// Cost of one plain model in the commander's own unit.
    pub unit_model_cost: Points,
    pub special: Vec<String>,
    pub attach_to: Option<String>,
}

impl CommanderDef {
    pub const DEFAULT_UNIT_MODEL_COST: Points = 3;

    pub fn new(id: impl Into<CommanderId>, name: impl Into<String>, points: Points) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            ..Self::default()
        }
    }

    pub fn cavalry(mut self) -> Self {
        self.is_cavalry_commander = true;
        self
    }

    pub fn attachment(mut self) -> Self {
        self.is_attachment = true;
        self
    }

    pub fn navy(mut self) -> Self {
        self.is_navy = true;
        self
    }

    pub fn with_option(mut self, option: impl Into<CommanderOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn with_unit_model_cost(mut self, cost: Points) -> Self {
        self.unit_model_cost = cost;
        self
    }

    /// Returns the listed option of the given kind, if this commander offers it.
    pub fn option(&self, kind: CommanderOptionKind) -> Option<&CommanderOption> {
        self.options.iter().find(|option| option.kind == kind)
    }

    /// Whether musician, standard bearer and aide-de-camp can be bought.
    pub const fn buys_unit_upgrades(&self) -> bool {
        !self.is_attachment && !self.is_navy
    }

    /// Price of one commander unit upgrade: the replaced infantryman costs double.
    pub const fn unit_upgrade_cost(&self) -> Points {
        self.unit_model_cost.saturating_mul(2)
    }
}

impl Default for CommanderDef {
    fn default() -> Self {
        Self {
            id: CommanderId::default(),
            name: String::new(),
            points: 0,
            stats: StatLine::default(),
            experience: Experience::default(),
            command_range: 0,
            command_points: 0,
            composition: String::new(),
            is_cavalry_commander: false,
            is_attachment: false,
            is_navy: false,
            options: Vec::new(),
            unit_model_cost: Self::DEFAULT_UNIT_MODEL_COST,
            special: Vec::new(),
            attach_to: None,
        }
    }
}
