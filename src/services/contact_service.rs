use crate::entities::contact_submission;
use crate::models::contact_model::{ContactSubmissionRequest, SubmissionResponse};
use crate::pricing::{OptionGroup, PriceTable, Selection};
use axum::http::StatusCode;
use chrono::{FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set,
};
use uuid::Uuid;

pub struct ContactService;

impl ContactService {
    /// Stores a new enquiry. The order total is derived server-side from the
    /// submitted service labels; whatever total the client claims is ignored.
    pub async fn create_submission(
        db: &DatabaseConnection,
        payload: ContactSubmissionRequest,
    ) -> Result<(contact_submission::Model, u32), (StatusCode, &'static str, String)> {
        let selection = Selection::from_labels(payload.services.iter().map(|s| s.as_str()));
        let total = selection.total(PriceTable::standard());

        let submission = contact_submission::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            bride_name: Set(payload.bride_name),
            groom_name: Set(payload.groom_name),
            phone: Set(payload.phone),
            email: Set(payload.email),
            wedding_date: Set(payload.wedding_date),
            location: Set(payload.location),
            services: Set(payload.services),
            additional_info: Set(payload.additional_info.filter(|s| !s.is_empty())),
            attachments: Set(payload.attachments),
            total_price: Set(total as i32),
            created_at: Set(Utc::now()),
        };

        let saved = submission.insert(db).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to save submission: {}", e),
            )
        })?;

        Ok((saved, total))
    }

    pub async fn list_submissions(
        db: &DatabaseConnection,
    ) -> Result<Vec<SubmissionResponse>, (StatusCode, &'static str, String)> {
        let submissions = contact_submission::Entity::find()
            .order_by_desc(contact_submission::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(submissions
            .into_iter()
            .map(|s| SubmissionResponse {
                id: s.public_id,
                bride_name: s.bride_name,
                groom_name: s.groom_name,
                phone: s.phone,
                email: s.email,
                wedding_date: s.wedding_date,
                location: s.location,
                services: s.services,
                additional_info: s.additional_info,
                attachments: s.attachments,
                total_price: s.total_price,
                created_at: s.created_at,
            })
            .collect())
    }

    /// Renders the Telegram notification: contact block, chosen package,
    /// per-group service details, priced add-ons and the derived total.
    pub fn build_notification(submission: &contact_submission::Model, total: u32) -> String {
        let selection =
            Selection::from_labels(submission.services.iter().map(|s| s.as_str()));
        let table = PriceTable::standard();

        let package_section = Self::package_section(&selection, table);
        let details_section = Self::details_section(&selection);
        let add_ons_section = Self::add_ons_section(&selection, table);

        let mut message = format!(
            "🎬 <b>Нова заявка на весільну зйомку!</b>\n\n\
             <b>Контактна інформація:</b>\n\
             • Наречена: {}\n\
             • Наречений: {}\n\
             • Телефон: {}\n\
             • Email: {}\n\
             • Дата весілля: {}\n\
             • Локація: {}\n\n---\n\n",
            submission.bride_name,
            submission.groom_name,
            submission.phone,
            submission.email,
            submission.wedding_date,
            submission.location,
        );

        for section in [package_section, details_section, add_ons_section]
            .into_iter()
            .flatten()
        {
            message.push_str(&section);
            message.push_str("---\n\n");
        }

        if total > 0 {
            message.push_str(&format!(
                "<b>Загальна вартість замовлення: ${}</b>\n\n",
                total
            ));
        }

        if let Some(info) = submission
            .additional_info
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            message.push_str(&format!("<b>Додаткова інформація:</b> {}\n\n", info));
        }

        // Kyiv local time of submission
        let kyiv = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        let submitted_at = Utc::now().with_timezone(&kyiv);
        message.push_str(&format!(
            "<b>Час подачі:</b> {}",
            submitted_at.format("%d.%m.%Y, %H:%M:%S")
        ));

        message
    }

    fn package_section(selection: &Selection, table: &PriceTable) -> Option<String> {
        let package = selection.package()?;
        let pricing = table.pricing(package);

        Some(format!(
            "📦 <b>ОБРАНИЙ ПАКЕТ:</b>\n• {} - ${}\n(Включає: {})\n",
            package.label(),
            pricing.base,
            pricing.included.join(" + "),
        ))
    }

    fn details_section(selection: &Selection) -> Option<String> {
        let included_groups = [
            OptionGroup::Morning,
            OptionGroup::Walk,
            OptionGroup::Ceremony,
            OptionGroup::Restaurant,
        ];

        let mut section = String::from("<b>Деталі послуг:</b>\n\n");
        let mut counter = 1;
        for group in included_groups {
            let details: Vec<&str> = selection
                .options()
                .iter()
                .filter(|o| o.group == group)
                .map(|o| Self::option_detail(&o.label, group))
                .collect();
            if details.is_empty() {
                continue;
            }
            section.push_str(&format!(
                "{}. {}: {}\n\n",
                counter,
                group.display_name(),
                details.join(", ")
            ));
            counter += 1;
        }

        (counter > 1).then_some(section)
    }

    fn add_ons_section(selection: &Selection, table: &PriceTable) -> Option<String> {
        let mut lines = Vec::new();
        for option in selection.options() {
            if !option.group.is_priced() {
                continue;
            }
            let detail = Self::option_detail(&option.label, option.group);
            let price = selection
                .package()
                .map(|p| table.add_on_price(p, &option.label))
                .unwrap_or(0);
            if price > 0 {
                lines.push(format!(
                    "{} ({}) — ${}\n\n",
                    option.group.display_name(),
                    detail.to_lowercase(),
                    price
                ));
            } else {
                lines.push(format!("• {}\n\n", option.label));
            }
        }

        if lines.is_empty() {
            return None;
        }
        Some(format!(
            "<b>Додаткові послуги:</b>\n\n{}",
            lines.concat()
        ))
    }

    /// "Ранок - Наречена" shown under the "Ранок" heading becomes "Наречена".
    fn option_detail(label: &str, group: OptionGroup) -> &str {
        label
            .strip_prefix(group.display_name())
            .and_then(|rest| rest.strip_prefix(" - "))
            .unwrap_or(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(services: Vec<&str>, total: i32) -> contact_submission::Model {
        contact_submission::Model {
            id: 1,
            public_id: Uuid::now_v7(),
            bride_name: "Анна".to_string(),
            groom_name: "Олексій".to_string(),
            phone: "380501234567".to_string(),
            email: "anna@example.com".to_string(),
            wedding_date: "2026-09-12".to_string(),
            location: "Київ".to_string(),
            services: services.into_iter().map(String::from).collect(),
            additional_info: None,
            attachments: vec![],
            total_price: total,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn notification_lists_package_details_and_total() {
        let model = submission(
            vec![
                "Комплексний пакет: Фото + Відео",
                "Ранок - Наречена",
                "Ранок - Наречений",
                "Церемонія - ЗАГС",
                "Love Story - Відео",
            ],
            850,
        );
        let message = ContactService::build_notification(&model, 850);

        assert!(message.contains("Нова заявка на весільну зйомку!"));
        assert!(message.contains("• Комплексний пакет: Фото + Відео - $700"));
        assert!(message.contains("1. Ранок: Наречена, Наречений"));
        assert!(message.contains("2. Церемонія: ЗАГС"));
        assert!(message.contains("Love Story (відео) — $150"));
        assert!(message.contains("<b>Загальна вартість замовлення: $850</b>"));
    }

    #[test]
    fn notification_without_services_skips_breakdown() {
        let model = submission(vec![], 0);
        let message = ContactService::build_notification(&model, 0);

        assert!(message.contains("• Наречена: Анна"));
        assert!(!message.contains("ОБРАНИЙ ПАКЕТ"));
        assert!(!message.contains("Деталі послуг"));
        assert!(!message.contains("Загальна вартість"));
    }
}
