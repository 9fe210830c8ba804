use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Wellcheck,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => {
                let name = Config::get(ConfigKey::Username);
                if name.is_empty() {
                    return String::from("You");
                }
                return name;
            }
            Author::Wellcheck => return String::from("Wellcheck"),
        }
    }
}
