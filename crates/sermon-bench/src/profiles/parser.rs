use super::domain::{PreacherProfile, PreachingCategory, PreachingEra, ProfileId};
use super::CatalogError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: String,
    name: String,
    description: String,
    categories: String,
    #[serde(default)]
    strengths: String,
    era: String,
    image_url: String,
}

pub(crate) fn parse_profiles<R: Read>(reader: R) -> Result<Vec<PreacherProfile>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut profiles = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = index + 2;

        let categories = split_list(&row.categories)
            .map(|tag| {
                tag.parse::<PreachingCategory>()
                    .map_err(|source| CatalogError::InvalidCategory { line, source })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let era = row
            .era
            .parse::<PreachingEra>()
            .map_err(|source| CatalogError::InvalidEra { line, source })?;

        profiles.push(PreacherProfile {
            id: ProfileId(row.id),
            name: row.name,
            description: row.description,
            categories,
            strengths: split_list(&row.strengths).map(str::to_string).collect(),
            era,
            image_url: row.image_url,
        });
    }

    Ok(profiles)
}

fn split_list(cell: &str) -> impl Iterator<Item = &str> {
    cell.split([';', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
