use crate::domain::a001_catalog::CatalogViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_species_detail::{format_measure, DetailRecord};
use leptos::prelude::*;
use thaw::*;

/// Display-ready copy of a detail record; every field is owned so the
/// rendered view does not borrow from the record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSummary {
    pub name: String,
    pub id_label: String,
    pub image: String,
    pub height: String,
    pub weight: String,
    pub categories: Vec<String>,
    /// Display name and hidden flag
    pub traits: Vec<(String, bool)>,
    pub stats: Vec<StatRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub value: u32,
    pub bar_style: String,
}

impl DetailSummary {
    pub fn new(record: DetailRecord, fallback_image: &str) -> Self {
        let height = format!("{} m", format_measure(record.height_m()));
        let weight = format!("{} kg", format_measure(record.weight_kg()));
        Self {
            id_label: format!("#{}", record.id.value()),
            image: record.image.unwrap_or_else(|| fallback_image.to_string()),
            height,
            weight,
            categories: record.categories,
            traits: record
                .traits
                .iter()
                .map(|t| (t.display_name(), t.hidden))
                .collect(),
            stats: record
                .statistics
                .iter()
                .map(|s| StatRow {
                    label: s.label().to_string(),
                    value: s.value,
                    bar_style: format!("width: {}%;", s.bar_percent()),
                })
                .collect(),
            name: record.name,
        }
    }
}

#[component]
pub fn DetailPanel() -> impl IntoView {
    let vm = use_context::<CatalogViewModel>().expect("CatalogViewModel not found in context");

    view! {
        <div class="detail-panel">
            {move || {
                if vm.detail_loading() {
                    return view! {
                        <div class="detail-panel__loading">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    }
                    .into_any();
                }
                if let Some(message) = vm.detail_error() {
                    return view! {
                        <div class="warning-box">
                            {icon("alert")}
                            <span>{format!("Details could not be loaded. {}", message)}</span>
                        </div>
                    }
                    .into_any();
                }
                match vm.detail() {
                    Some(record) => {
                        let fallback = vm.with_config(|c| c.media.fallback_image.clone());
                        let summary = DetailSummary::new(record, &fallback);
                        view! { <DetailBody summary=summary /> }.into_any()
                    }
                    None => view! {
                        <p class="detail-panel__hint">"Select a species to see its details"</p>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DetailBody(summary: DetailSummary) -> impl IntoView {
    let DetailSummary {
        name,
        id_label,
        image,
        height,
        weight,
        categories,
        traits,
        stats,
    } = summary;
    let alt = name.clone();

    view! {
        <div class="detail-body">
            <img class="detail-body__image" src=image alt=alt />
            <h2 class="detail-body__name">{name}</h2>
            <p class="detail-body__id">{id_label}</p>

            <div class="detail-body__measures">
                <div class="detail-body__measure">
                    <span class="detail-body__label">"Height"</span>
                    <span>{height}</span>
                </div>
                <div class="detail-body__measure">
                    <span class="detail-body__label">"Weight"</span>
                    <span>{weight}</span>
                </div>
            </div>

            <h3 class="detail-body__section">"Types"</h3>
            <div class="detail-body__chips">
                {categories
                    .into_iter()
                    .map(|category| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {category}
                        </Badge>
                    })
                    .collect_view()}
            </div>

            <h3 class="detail-body__section">"Abilities"</h3>
            <ul class="detail-body__abilities">
                {traits
                    .into_iter()
                    .map(|(label, hidden)| view! {
                        <li>
                            {label}
                            {hidden.then(|| view! {
                                <span class="detail-body__hidden">" (hidden)"</span>
                            })}
                        </li>
                    })
                    .collect_view()}
            </ul>

            <h3 class="detail-body__section">"Base stats"</h3>
            <div class="detail-body__stats">
                {stats
                    .into_iter()
                    .map(|row| view! {
                        <div class="stat-row">
                            <span class="stat-row__label">{row.label}</span>
                            <div class="stat-row__bar">
                                <div class="stat-row__fill" style=row.bar_style></div>
                            </div>
                            <span class="stat-row__value">{row.value}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog_entry::SpeciesId;
    use contracts::domain::a002_species_detail::{StatEntry, TraitEntry};

    fn charizard() -> DetailRecord {
        DetailRecord {
            id: SpeciesId(6),
            name: "charizard".to_string(),
            image: None,
            height: 17,
            weight: 905,
            categories: vec!["fire".to_string(), "flying".to_string()],
            traits: vec![
                TraitEntry {
                    name: "blaze".to_string(),
                    hidden: false,
                },
                TraitEntry {
                    name: "solar-power".to_string(),
                    hidden: true,
                },
            ],
            statistics: vec![
                StatEntry {
                    name: "hp".to_string(),
                    value: 78,
                },
                StatEntry {
                    name: "special-attack".to_string(),
                    value: 109,
                },
            ],
        }
    }

    #[test]
    fn test_summary_takes_record_by_value() {
        let summary = DetailSummary::new(charizard(), "/pokeball.svg");
        assert_eq!(summary.name, "charizard");
        assert_eq!(summary.id_label, "#6");
        assert_eq!(summary.image, "/pokeball.svg");
        assert_eq!(summary.height, "1.7 m");
        assert_eq!(summary.weight, "90.5 kg");
        assert_eq!(summary.categories, vec!["fire", "flying"]);
    }

    #[test]
    fn test_summary_traits_and_stats() {
        let summary = DetailSummary::new(charizard(), "/pokeball.svg");
        assert_eq!(
            summary.traits,
            vec![("blaze".to_string(), false), ("solar power".to_string(), true)]
        );
        assert_eq!(
            summary.stats,
            vec![
                StatRow {
                    label: "HP".to_string(),
                    value: 78,
                    bar_style: "width: 78%;".to_string(),
                },
                StatRow {
                    label: "Sp. Atk".to_string(),
                    value: 109,
                    bar_style: "width: 100%;".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_summary_keeps_sprite() {
        let mut record = charizard();
        record.image = Some("https://example.test/6.png".to_string());
        let summary = DetailSummary::new(record, "/pokeball.svg");
        assert_eq!(summary.image, "https://example.test/6.png");
    }
}
