use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);
    };
}

id_newtype!(UserId);
id_newtype!(BoardId);
id_newtype!(ColumnId);
id_newtype!(TaskId);
