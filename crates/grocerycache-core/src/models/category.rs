use std::fmt;
use std::str::FromStr;

/// Storefront sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Coffee,
    Candy,
    Dairy,
    BreadBakery,
    MeatSeafood,
    FreshProduce,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Coffee,
        Category::Candy,
        Category::Dairy,
        Category::BreadBakery,
        Category::MeatSeafood,
        Category::FreshProduce,
    ];

    /// The tag used by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Candy => "candy",
            Category::Dairy => "dairy",
            Category::BreadBakery => "bread-bakery",
            Category::MeatSeafood => "meat-seafood",
            Category::FreshProduce => "fresh-produce",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Get the next category (wrapping around)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous category (wrapping around)
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(Category::Coffee.next(), Category::Candy);
        assert_eq!(Category::FreshProduce.next(), Category::Coffee);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Category::Candy.prev(), Category::Coffee);
        assert_eq!(Category::Coffee.prev(), Category::FreshProduce);
    }

    #[test]
    fn test_from_str_roundtrips_tags() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("Coffee".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_default_is_coffee() {
        assert_eq!(Category::default(), Category::Coffee);
        assert_eq!(Category::default().to_string(), "coffee");
    }
}
