use serde::{Deserialize, Serialize};

pub const MOVES_PER_CREATURE: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub power: i32,
    pub accuracy: i32,
    pub pp: i32,
}

impl MoveData {
    /// Utility moves (power 0) raise the defend flag instead of dealing damage.
    pub fn is_utility(&self) -> bool {
        self.power == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatureData {
    pub name: String,
    #[serde(rename = "maxHp")]
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub moves: Vec<MoveData>,
}

/// Ordered creature catalog. Match setup samples combatants by index, so
/// entries keep their file order.
#[derive(Clone, Debug)]
pub struct RosterDatabase {
    entries: Vec<CreatureData>,
}

impl RosterDatabase {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn minimal() -> Self {
        fn mk(
            name: &str,
            max_hp: i32,
            attack: i32,
            defense: i32,
            moves: [(&str, i32, i32, i32); MOVES_PER_CREATURE],
        ) -> CreatureData {
            CreatureData {
                name: name.to_string(),
                max_hp,
                attack,
                defense,
                moves: moves
                    .iter()
                    .map(|&(name, power, accuracy, pp)| MoveData {
                        name: name.to_string(),
                        power,
                        accuracy,
                        pp,
                    })
                    .collect(),
            }
        }

        let mut db = Self::new();
        db.insert(mk(
            "Pikachu",
            40,
            11,
            6,
            [("Thunder", 40, 95, 15), ("Quick Attack", 40, 100, 20), ("Growl", 0, 100, 25)],
        ));
        db.insert(mk(
            "Charmander",
            45,
            10,
            7,
            [("Ember", 40, 95, 15), ("Scratch", 35, 100, 25), ("Tail Whip", 0, 100, 25)],
        ));
        db.insert(mk(
            "Squirtle",
            50,
            9,
            9,
            [("Water Gun", 40, 95, 15), ("Tackle", 40, 100, 25), ("Withdraw", 0, 100, 25)],
        ));
        db.insert(mk(
            "Bulbasaur",
            48,
            9,
            8,
            [("Vine Whip", 45, 100, 15), ("Tackle", 40, 100, 25), ("Leech Seed", 0, 90, 20)],
        ));
        db.insert(mk(
            "Gengar",
            55,
            12,
            6,
            [("Shadow Ball", 50, 90, 12), ("Lick", 30, 95, 20), ("Hypnosis", 0, 70, 8)],
        ));
        db.insert(mk(
            "Onix",
            60,
            11,
            12,
            [("Rock Throw", 50, 90, 15), ("Tackle", 40, 100, 25), ("Harden", 0, 100, 20)],
        ));
        db
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        const DEFAULT_ROSTER_YAML: &str = include_str!("../../data/roster.yaml");
        Self::load_from_yaml_str(DEFAULT_ROSTER_YAML)
    }

    pub fn insert(&mut self, data: CreatureData) {
        self.entries.push(data);
    }

    pub fn get(&self, index: usize) -> Option<&CreatureData> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CreatureData] {
        &self.entries
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self, Box<dyn std::error::Error>> {
        // Parse YAML, convert to JSON, then deserialize to maintain serde_json types
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let json_value = yaml_to_json(yaml_value);

        let entries: Vec<CreatureData> = serde_json::from_value(json_value)?;
        let mut db = Self::new();
        for data in entries {
            validate_entry(&data)?;
            db.insert(data);
        }
        Ok(db)
    }
}

impl Default for RosterDatabase {
    fn default() -> Self {
        Self::load_default().unwrap_or_else(|_| Self::minimal())
    }
}

fn validate_entry(data: &CreatureData) -> Result<(), String> {
    if data.max_hp <= 0 {
        return Err(format!("'{}' has non-positive max HP", data.name));
    }
    if data.moves.len() != MOVES_PER_CREATURE {
        return Err(format!(
            "'{}' must carry exactly {} moves, found {}",
            data.name,
            MOVES_PER_CREATURE,
            data.moves.len()
        ));
    }
    for mv in &data.moves {
        if mv.power < 0 {
            return Err(format!("move '{}' has negative power", mv.name));
        }
        if !(0..=100).contains(&mv.accuracy) {
            return Err(format!("move '{}' accuracy must be 0..=100", mv.name));
        }
        if mv.pp < 0 {
            return Err(format!("move '{}' has negative PP", mv.name));
        }
    }
    Ok(())
}

/// Convert serde_yaml::Value to serde_json::Value
fn yaml_to_json(yaml: serde_yaml::Value) -> serde_json::Value {
    match yaml {
        serde_yaml::Value::Null => serde_json::Value::Null,
        serde_yaml::Value::Bool(b) => serde_json::Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_json::Value::Number(i.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            } else {
                serde_json::Value::Null
            }
        }
        serde_yaml::Value::String(s) => serde_json::Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            serde_json::Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let obj: serde_json::Map<String, serde_json::Value> = map
                .into_iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        _ => return None,
                    };
                    Some((key, yaml_to_json(v)))
                })
                .collect();
            serde_json::Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
