use super::enums::known;
use super::{clean_description, date, image, list, number, text};
use crate::model::{
    Appearance, CharacterDetail, CharacterRole, FuzzyDate, Media, MediaCharacter, MediaStaff,
    PersonName, PersonRef, StaffDetail, UNKNOWN,
};
use crate::query::dto::{
    CharacterDto, CharacterEdgeDto, CharacterMediaEdgeDto, NameDto, PersonNodeDto, StaffDto,
    StaffEdgeDto, StaffMediaEdgeDto, StudioMediaEdgeDto,
};

impl From<NameDto> for PersonName {
    fn from(dto: NameDto) -> Self {
        Self {
            full: text(dto.full),
            native: text(dto.native),
            user_preferred: text(dto.user_preferred),
            alternative: list(dto.alternative)
                .into_iter()
                .filter(|name| !name.is_empty())
                .collect(),
            alternative_spoiler: list(dto.alternative_spoiler)
                .into_iter()
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

fn name(dto: Option<NameDto>) -> PersonName {
    dto.map(PersonName::from).unwrap_or_default()
}

impl From<PersonNodeDto> for PersonRef {
    fn from(dto: PersonNodeDto) -> Self {
        Self {
            id: number(dto.id),
            name: name(dto.name).display().to_string(),
            image: image(dto.image),
        }
    }
}

/// Joins labelled facts, one per line, then the description after a blank line.
fn biography(facts: Vec<(&str, String)>, description: Option<String>) -> String {
    let facts = facts
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    let description = description
        .as_deref()
        .map(clean_description)
        .unwrap_or_default();

    match (facts.is_empty(), description.is_empty()) {
        (true, _) => description,
        (false, true) => facts,
        (false, false) => format!("{facts}\n\n{description}"),
    }
}

fn long_date(value: FuzzyDate) -> String {
    value.to_long_string()
}

pub fn character_biography(dto: &CharacterDto) -> String {
    biography(
        vec![
            ("Birthday", long_date(date(dto.date_of_birth.clone()))),
            ("Age", dto.age.clone().unwrap_or_default()),
            ("Gender", dto.gender.clone().unwrap_or_default()),
            ("Blood Type", dto.blood_type.clone().unwrap_or_default()),
        ],
        dto.description.clone(),
    )
}

pub fn staff_biography(dto: &StaffDto) -> String {
    let years = list(dto.years_active.clone());
    let years_active = match years.as_slice() {
        [] => String::new(),
        [start] => format!("{start}-Present"),
        [start, end, ..] => format!("{start}-{end}"),
    };
    biography(
        vec![
            ("Birth", long_date(date(dto.date_of_birth.clone()))),
            ("Death", long_date(date(dto.date_of_death.clone()))),
            (
                "Age",
                dto.age
                    .filter(|age| *age != UNKNOWN)
                    .map(|age| age.to_string())
                    .unwrap_or_default(),
            ),
            ("Gender", dto.gender.clone().unwrap_or_default()),
            ("Blood Type", dto.blood_type.clone().unwrap_or_default()),
            ("Home Town", dto.home_town.clone().unwrap_or_default()),
            ("Years Active", years_active),
        ],
        dto.description.clone(),
    )
}

impl From<CharacterDto> for CharacterDetail {
    fn from(dto: CharacterDto) -> Self {
        let biography = character_biography(&dto);
        Self {
            id: number(dto.id),
            name: name(dto.name),
            image: image(dto.image),
            favourites: number(dto.favourites),
            is_favourite: dto.is_favourite.unwrap_or(false),
            biography,
        }
    }
}

impl From<StaffDto> for StaffDetail {
    fn from(dto: StaffDto) -> Self {
        let biography = staff_biography(&dto);
        Self {
            id: number(dto.id),
            name: name(dto.name),
            image: image(dto.image),
            favourites: number(dto.favourites),
            is_favourite: dto.is_favourite.unwrap_or(false),
            language: text(dto.language),
            occupations: list(dto.primary_occupations),
            biography,
        }
    }
}

pub(crate) fn media_character(edge: CharacterEdgeDto) -> Option<MediaCharacter> {
    Some(MediaCharacter {
        character: edge.node?.into(),
        role: known(edge.role),
        voice_actors: list(edge.voice_actors)
            .into_iter()
            .map(PersonRef::from)
            .collect(),
    })
}

pub(crate) fn media_staff(edge: StaffEdgeDto) -> Option<MediaStaff> {
    Some(MediaStaff {
        staff: edge.node?.into(),
        role: text(edge.role),
    })
}

fn role_label(role: CharacterRole) -> &'static str {
    match role {
        CharacterRole::Main => "Main",
        CharacterRole::Supporting => "Supporting",
        CharacterRole::Background => "Background",
        CharacterRole::Unknown => "",
    }
}

pub(crate) fn character_appearance(edge: CharacterMediaEdgeDto) -> Option<Appearance> {
    Some(Appearance {
        media: Media::from(edge.node?),
        role: role_label(known(edge.character_role)).to_string(),
    })
}

pub(crate) fn staff_appearance(edge: StaffMediaEdgeDto) -> Option<Appearance> {
    Some(Appearance {
        media: Media::from(edge.node?),
        role: text(edge.staff_role),
    })
}

pub(crate) fn studio_production(edge: StudioMediaEdgeDto) -> Option<Media> {
    edge.node.map(Media::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn character_biography_leads_with_known_facts() {
        let dto: CharacterDto = serde_json::from_value(json!({
            "id": 1,
            "dateOfBirth": { "month": 3, "day": 3 },
            "age": "17",
            "gender": null,
            "bloodType": "A",
            "description": "A wandering mage.<br>~!Secretly a demon.!~"
        }))
        .unwrap();
        assert_eq!(
            character_biography(&dto),
            "Birthday: March 3\nAge: 17\nBlood Type: A\n\nA wandering mage."
        );
    }

    #[test]
    fn staff_years_active_is_open_ended_with_one_year() {
        let dto: StaffDto = serde_json::from_value(json!({
            "yearsActive": [2010],
            "homeTown": "Tokyo"
        }))
        .unwrap();
        assert_eq!(staff_biography(&dto), "Home Town: Tokyo\nYears Active: 2010-Present");
    }

    #[test]
    fn spoiler_names_stay_separate() {
        let dto: CharacterDto = serde_json::from_value(json!({
            "name": {
                "full": "Frieren",
                "alternative": ["The Slayer", ""],
                "alternativeSpoiler": ["Hidden"]
            }
        }))
        .unwrap();
        let detail = CharacterDetail::from(dto);
        assert_eq!(detail.name.display(), "Frieren");
        assert_eq!(detail.name.alternative, vec!["The Slayer"]);
        assert_eq!(detail.name.alternative_spoiler, vec!["Hidden"]);
        assert!(detail.biography.is_empty());
    }
}
