/// A single round in the magazine.
///
/// Ordered so that `Blank < Live`, which gives sorted magazines a canonical
/// first arrangement for enumeration.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Charge {
    Blank,
    Live,
}

impl Charge {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl TryFrom<char> for Charge {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Self::Live),
            'B' => Ok(Self::Blank),
            _ => Err(anyhow::anyhow!("invalid charge {:?}, expected L or B", c)),
        }
    }
}

impl std::fmt::Display for Charge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Live => "L",
                Self::Blank => "B",
            }
        )
    }
}
