/// Font presentation hint for header text. The surface maps this onto the
/// platform's actual font stack; only size and weight travel through.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl Font {
    pub const fn system(size: f32) -> Self {
        Font {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::system(16.0)
    }
}
