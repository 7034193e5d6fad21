//! Static service catalog: the two packages, their option groups and the
//! price table used to derive an order total.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageId {
    /// "Комплексний пакет: Фото + Відео"
    PhotoVideo,
    /// "Пакет: Двокамерна відеозйомка"
    TwoCamera,
}

impl PackageId {
    pub fn label(self) -> &'static str {
        match self {
            PackageId::PhotoVideo => "Комплексний пакет: Фото + Відео",
            PackageId::TwoCamera => "Пакет: Двокамерна відеозйомка",
        }
    }

    pub fn from_label(label: &str) -> Option<PackageId> {
        match label {
            "Комплексний пакет: Фото + Відео" => Some(PackageId::PhotoVideo),
            "Пакет: Двокамерна відеозйомка" => Some(PackageId::TwoCamera),
            _ => None,
        }
    }
}

/// Exclusivity group of a selectable option. Every option belongs to exactly
/// one group; the group decides whether siblings can be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionGroup {
    Morning,
    Walk,
    Ceremony,
    Restaurant,
    /// Church wedding add-on ("Вінчання")
    CeremonyExtra,
    LoveStory,
}

impl OptionGroup {
    pub fn allows_multiple(self) -> bool {
        matches!(self, OptionGroup::Morning | OptionGroup::LoveStory)
    }

    /// Only add-on groups carry a price; included groups always cost 0.
    pub fn is_priced(self) -> bool {
        matches!(self, OptionGroup::CeremonyExtra | OptionGroup::LoveStory)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OptionGroup::Morning => "Ранок",
            OptionGroup::Walk => "Прогулянка",
            OptionGroup::Ceremony => "Церемонія",
            OptionGroup::Restaurant => "Ресторан",
            OptionGroup::CeremonyExtra => "Вінчання",
            OptionGroup::LoveStory => "Love Story",
        }
    }
}

pub struct ServiceOption {
    pub label: &'static str,
    pub group: OptionGroup,
}

/// Every option the form offers, with its group spelled out explicitly.
pub const OPTIONS: &[ServiceOption] = &[
    ServiceOption { label: "Ранок - Наречена", group: OptionGroup::Morning },
    ServiceOption { label: "Ранок - Наречений", group: OptionGroup::Morning },
    ServiceOption { label: "Прогулянка - На території закладу", group: OptionGroup::Walk },
    ServiceOption { label: "Прогулянка - Інша локація", group: OptionGroup::Walk },
    ServiceOption { label: "Церемонія - ЗАГС", group: OptionGroup::Ceremony },
    ServiceOption { label: "Церемонія - На території ресторану", group: OptionGroup::Ceremony },
    ServiceOption { label: "Ресторан - До закінчення програми ведучого", group: OptionGroup::Restaurant },
    ServiceOption { label: "Вінчання - Відео", group: OptionGroup::CeremonyExtra },
    ServiceOption { label: "Вінчання - Фото", group: OptionGroup::CeremonyExtra },
    ServiceOption { label: "Love Story - Відео", group: OptionGroup::LoveStory },
    ServiceOption { label: "Love Story - Фото", group: OptionGroup::LoveStory },
];

/// Exact-label catalog lookup. Unknown labels return None and are treated as
/// unpriced by the calculator.
pub fn option_group(label: &str) -> Option<OptionGroup> {
    OPTIONS.iter().find(|o| o.label == label).map(|o| o.group)
}

pub struct PackagePricing {
    pub package: PackageId,
    pub base: u32,
    pub included: &'static [&'static str],
    pub add_on_prices: &'static [(&'static str, u32)],
}

pub struct PriceTable {
    packages: &'static [PackagePricing],
}

static STANDARD: PriceTable = PriceTable {
    packages: &[
        PackagePricing {
            package: PackageId::PhotoVideo,
            base: 700,
            included: &["Повнометражний фільм", "Весільний кліп", "Обробка фотографій"],
            add_on_prices: &[("Love Story - Відео", 150), ("Love Story - Фото", 150)],
        },
        PackagePricing {
            package: PackageId::TwoCamera,
            base: 500,
            included: &["Повнометражний фільм", "Весільний кліп"],
            add_on_prices: &[("Love Story - Відео", 150)],
        },
    ],
};

impl PriceTable {
    pub fn standard() -> &'static PriceTable {
        &STANDARD
    }

    pub fn pricing(&self, package: PackageId) -> &PackagePricing {
        self.packages
            .iter()
            .find(|p| p.package == package)
            .expect("every package has a pricing entry")
    }

    /// Price of an add-on label within the given package; 0 when the package
    /// does not price that label.
    pub fn add_on_price(&self, package: PackageId, label: &str) -> u32 {
        self.pricing(package)
            .add_on_prices
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, price)| *price)
            .unwrap_or(0)
    }
}
