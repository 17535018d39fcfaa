use super::Serializer;

use rowmap_core::driver::{Capability, Dialect};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Mysql,
    Sqlite,
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    /// The serializer for the dialect a backend speaks.
    pub fn for_capability(capability: &Capability) -> Serializer {
        match capability.dialect {
            Dialect::Mysql => Serializer::mysql(),
            Dialect::Sqlite => Serializer::sqlite(),
        }
    }
}
