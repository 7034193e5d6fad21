use super::catalog::{option_group, OptionGroup, PackageId, PriceTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ChosenOption {
    pub label: String,
    pub group: OptionGroup,
}

/// The state behind the multi-step service picker: the chosen package plus an
/// ordered list of chosen option labels. Group exclusivity is enforced on
/// every toggle, so the state is consistent by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    package: Option<PackageId>,
    options: Vec<ChosenOption>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    pub fn package(&self) -> Option<PackageId> {
        self.package
    }

    pub fn options(&self) -> &[ChosenOption] {
        &self.options
    }

    /// Replaces the current package. All options are cleared: the option set
    /// of one package is never carried into another.
    pub fn select_package(&mut self, package: PackageId) {
        self.package = Some(package);
        self.options.clear();
    }

    /// Toggles an option label. Selecting into a single-select group first
    /// evicts the sibling from the same group; deselecting only removes the
    /// one label.
    pub fn toggle_option(&mut self, label: &str, group: OptionGroup, allows_multiple: bool) {
        if let Some(pos) = self.options.iter().position(|o| o.label == label) {
            self.options.remove(pos);
            return;
        }

        if !allows_multiple {
            self.options.retain(|o| o.group != group);
        }

        self.options.push(ChosenOption {
            label: label.to_string(),
            group,
        });
    }

    /// Rebuilds a selection from submitted service labels. Labels the catalog
    /// does not know are skipped here; they still travel with the stored
    /// submission untouched.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Selection {
        let mut selection = Selection::new();
        for label in labels {
            if let Some(package) = PackageId::from_label(label) {
                selection.select_package(package);
            } else if let Some(group) = option_group(label) {
                selection.toggle_option(label, group, group.allows_multiple());
            }
        }
        selection
    }

    /// Order total: 0 without a package, otherwise the package base plus the
    /// per-package price of every selected add-on label. Labels the package
    /// does not price contribute 0 and never fail.
    pub fn total(&self, table: &PriceTable) -> u32 {
        let Some(package) = self.package else {
            return 0;
        };

        let mut total = table.pricing(package).base;
        for option in &self.options {
            if option.group.is_priced() {
                total += table.add_on_price(package, &option.label);
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static PriceTable {
        PriceTable::standard()
    }

    #[test]
    fn total_is_zero_without_package() {
        let mut selection = Selection::new();
        assert_eq!(selection.total(table()), 0);

        // Options without a package still price to 0
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        assert_eq!(selection.total(table()), 0);
    }

    #[test]
    fn base_price_without_add_ons() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);
        assert_eq!(selection.total(table()), 700);

        selection.select_package(PackageId::TwoCamera);
        assert_eq!(selection.total(table()), 500);
    }

    #[test]
    fn love_story_video_adds_150() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        assert_eq!(selection.total(table()), 850);
    }

    #[test]
    fn included_options_cost_nothing() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::TwoCamera);
        selection.toggle_option("Ранок - Наречена", OptionGroup::Morning, true);
        selection.toggle_option("Ранок - Наречений", OptionGroup::Morning, true);
        selection.toggle_option("Церемонія - ЗАГС", OptionGroup::Ceremony, false);
        assert_eq!(selection.total(table()), 500);
    }

    #[test]
    fn unpriced_add_on_contributes_zero() {
        // The two-camera package does not price the photo Love Story
        let mut selection = Selection::new();
        selection.select_package(PackageId::TwoCamera);
        selection.toggle_option("Love Story - Фото", OptionGroup::LoveStory, true);
        assert_eq!(selection.total(table()), 500);

        // Unknown labels are silently worth 0 as well
        selection.toggle_option("Дрон - Зйомка з повітря", OptionGroup::LoveStory, true);
        assert_eq!(selection.total(table()), 500);
    }

    #[test]
    fn selecting_package_clears_options() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        selection.toggle_option("Ресторан - До закінчення програми ведучого", OptionGroup::Restaurant, false);
        assert!(!selection.options().is_empty());

        selection.select_package(PackageId::TwoCamera);
        assert_eq!(selection.package(), Some(PackageId::TwoCamera));
        assert!(selection.options().is_empty());
        assert_eq!(selection.total(table()), 500);
    }

    #[test]
    fn single_select_group_keeps_one_label() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);

        selection.toggle_option("Церемонія - ЗАГС", OptionGroup::Ceremony, false);
        selection.toggle_option("Церемонія - На території ресторану", OptionGroup::Ceremony, false);

        let ceremony: Vec<&str> = selection
            .options()
            .iter()
            .filter(|o| o.group == OptionGroup::Ceremony)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(ceremony, vec!["Церемонія - На території ресторану"]);
    }

    #[test]
    fn multi_select_group_accumulates() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);

        selection.toggle_option("Ранок - Наречена", OptionGroup::Morning, true);
        selection.toggle_option("Ранок - Наречений", OptionGroup::Morning, true);
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        selection.toggle_option("Love Story - Фото", OptionGroup::LoveStory, true);

        assert_eq!(selection.options().len(), 4);
        assert_eq!(selection.total(table()), 1000);
    }

    #[test]
    fn exclusivity_holds_under_arbitrary_sequences() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);

        let moves: &[(&str, OptionGroup)] = &[
            ("Ранок - Наречена", OptionGroup::Morning),
            ("Прогулянка - На території закладу", OptionGroup::Walk),
            ("Прогулянка - Інша локація", OptionGroup::Walk),
            ("Церемонія - ЗАГС", OptionGroup::Ceremony),
            ("Ресторан - До закінчення програми ведучого", OptionGroup::Restaurant),
            ("Ранок - Наречений", OptionGroup::Morning),
            ("Церемонія - На території ресторану", OptionGroup::Ceremony),
            ("Прогулянка - На території закладу", OptionGroup::Walk),
            ("Вінчання - Відео", OptionGroup::CeremonyExtra),
            ("Вінчання - Фото", OptionGroup::CeremonyExtra),
        ];
        for (label, group) in moves {
            selection.toggle_option(label, *group, group.allows_multiple());
        }

        for group in [
            OptionGroup::Walk,
            OptionGroup::Ceremony,
            OptionGroup::Restaurant,
            OptionGroup::CeremonyExtra,
        ] {
            let count = selection.options().iter().filter(|o| o.group == group).count();
            assert!(count <= 1, "{:?} holds {} labels", group, count);
        }
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut selection = Selection::new();
        selection.select_package(PackageId::PhotoVideo);
        selection.toggle_option("Ранок - Наречена", OptionGroup::Morning, true);

        let before = selection.clone();
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        selection.toggle_option("Love Story - Відео", OptionGroup::LoveStory, true);
        assert_eq!(selection, before);
    }

    #[test]
    fn from_labels_rebuilds_submitted_state() {
        let labels = [
            "Комплексний пакет: Фото + Відео",
            "Ранок - Наречена",
            "Love Story - Відео",
            "Щось невідоме",
        ];
        let selection = Selection::from_labels(labels);

        assert_eq!(selection.package(), Some(PackageId::PhotoVideo));
        assert_eq!(selection.options().len(), 2);
        assert_eq!(selection.total(table()), 850);
    }
}
