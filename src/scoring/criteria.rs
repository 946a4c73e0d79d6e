use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of scoring criteria.
///
/// Ten "classic" criteria are derived from property attributes (price, area,
/// condition, ...); the remaining twelve are direct 0-10 ratings entered
/// during a viewing. Every criterion always receives a score; weights decide
/// which of them count towards the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    PricePerSqm,
    AreaSize,
    Condition,
    Location,
    Parking,
    Garden,
    RentalUnit,
    Age,
    Bedrooms,
    Bathrooms,
    KitchenQuality,
    LivingRoomQuality,
    StorageQuality,
    FloorPlanQuality,
    BalconyTerraceQuality,
    LightAndAirQuality,
    AreaImpression,
    NeighborhoodImpression,
    PublicTransportAccess,
    SchoolsProximity,
    ViewingImpression,
    Potential,
}

impl Criterion {
    pub const COUNT: usize = 22;

    /// Every criterion, in display order. Weights and evaluations are indexed
    /// by position in this array, so no criterion can be skipped.
    pub const ALL: [Criterion; Criterion::COUNT] = [
        Criterion::PricePerSqm,
        Criterion::AreaSize,
        Criterion::Condition,
        Criterion::Location,
        Criterion::Parking,
        Criterion::Garden,
        Criterion::RentalUnit,
        Criterion::Age,
        Criterion::Bedrooms,
        Criterion::Bathrooms,
        Criterion::KitchenQuality,
        Criterion::LivingRoomQuality,
        Criterion::StorageQuality,
        Criterion::FloorPlanQuality,
        Criterion::BalconyTerraceQuality,
        Criterion::LightAndAirQuality,
        Criterion::AreaImpression,
        Criterion::NeighborhoodImpression,
        Criterion::PublicTransportAccess,
        Criterion::SchoolsProximity,
        Criterion::ViewingImpression,
        Criterion::Potential,
    ];

    /// Position in `ALL`, used as the index into weight/score arrays.
    pub fn index(self) -> usize {
        Criterion::ALL
            .iter()
            .position(|c| *c == self)
            .expect("criterion present in ALL")
    }

    /// Stable string id, matching the serde representation (snake_case).
    pub fn id(self) -> &'static str {
        match self {
            Criterion::PricePerSqm => "price_per_sqm",
            Criterion::AreaSize => "area_size",
            Criterion::Condition => "condition",
            Criterion::Location => "location",
            Criterion::Parking => "parking",
            Criterion::Garden => "garden",
            Criterion::RentalUnit => "rental_unit",
            Criterion::Age => "age",
            Criterion::Bedrooms => "bedrooms",
            Criterion::Bathrooms => "bathrooms",
            Criterion::KitchenQuality => "kitchen_quality",
            Criterion::LivingRoomQuality => "living_room_quality",
            Criterion::StorageQuality => "storage_quality",
            Criterion::FloorPlanQuality => "floor_plan_quality",
            Criterion::BalconyTerraceQuality => "balcony_terrace_quality",
            Criterion::LightAndAirQuality => "light_and_air_quality",
            Criterion::AreaImpression => "area_impression",
            Criterion::NeighborhoodImpression => "neighborhood_impression",
            Criterion::PublicTransportAccess => "public_transport_access",
            Criterion::SchoolsProximity => "schools_proximity",
            Criterion::ViewingImpression => "viewing_impression",
            Criterion::Potential => "potential",
        }
    }

    /// Short display label (Norwegian, as in the app this tool scores for).
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn definition(self) -> &'static CriterionDefinition {
        &DEFINITIONS[self.index()]
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Criterion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown criterion '{}' (see `boligscore weights` for valid ids)", s))
    }
}

/// Static description of one criterion, used by the weights view and the
/// breakdown view. `max_weight` is a suggested slider ceiling for front ends;
/// the engine itself accepts any non-negative weight.
#[derive(Debug, Clone)]
pub struct CriterionDefinition {
    pub id: Criterion,
    pub label: &'static str,
    pub description: &'static str,
    pub max_weight: Option<u32>,
}

pub static DEFINITIONS: [CriterionDefinition; Criterion::COUNT] = [
    CriterionDefinition {
        id: Criterion::PricePerSqm,
        label: "Pris per kvm",
        description: "Vurderer pris i forhold til areal. Lavere er bedre.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::AreaSize,
        label: "Størrelse (BRA)",
        description: "Total bruksareal. Større er generelt bedre, innenfor rimelighetens grenser.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Condition,
        label: "Tilstand (Generell)",
        description: "Boligens generelle vedlikeholdsstandard.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Location,
        label: "Beliggenhet (Makro)",
        description: "Kvaliteten på den overordnede geografiske plasseringen (bydel, kommune).",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Parking,
        label: "Parkering",
        description: "Tilgjengelighet og type parkering (garasje, antall plasser).",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Garden,
        label: "Hage",
        description: "Tilstedeværelse og størrelse på hage.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::RentalUnit,
        label: "Utleiedel (Hybel)",
        description: "Om boligen har en separat, godkjent utleiedel.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Age,
        label: "Alder på bolig",
        description: "Nyere boliger får ofte høyere score, men totalrenoverte eldre boliger kan også score høyt.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Bedrooms,
        label: "Antall Soverom",
        description: "Antall soverom i boligen. Vurderes også ift. totalstørrelse.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::Bathrooms,
        label: "Antall Bad",
        description: "Antall bad/WC i boligen. Vurderes også ift. standard.",
        max_weight: None,
    },
    CriterionDefinition {
        id: Criterion::KitchenQuality,
        label: "Kjøkkenkvalitet",
        description: "Standard og funksjonalitet på kjøkken (0-10 poeng).",
        max_weight: Some(20),
    },
    CriterionDefinition {
        id: Criterion::LivingRoomQuality,
        label: "Stuekvalitet",
        description: "Størrelse, lysforhold og atmosfære i stue(r) (0-10 poeng).",
        max_weight: Some(20),
    },
    CriterionDefinition {
        id: Criterion::StorageQuality,
        label: "Oppbevaringsmuligheter",
        description: "Kvalitet og mengde lagringsplass (boder, skap) (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::FloorPlanQuality,
        label: "Planløsning",
        description: "Effektivitet og funksjonalitet i boligens planløsning (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::BalconyTerraceQuality,
        label: "Balkong/Terrasse",
        description: "Kvalitet, størrelse og solforhold for uteplass(er) (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::LightAndAirQuality,
        label: "Lysforhold og luftighet",
        description: "Generelle lysforhold, vindusflater og romfølelse (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::AreaImpression,
        label: "Områdeinntrykk (Mikro)",
        description: "Inntrykk av umiddelbart nærområde, gaten, utsikt (0-10 poeng).",
        max_weight: Some(20),
    },
    CriterionDefinition {
        id: Criterion::NeighborhoodImpression,
        label: "Nabolagsfølelse",
        description: "Atmosfære, trygghet og fasiliteter i nabolaget (0-10 poeng).",
        max_weight: Some(20),
    },
    CriterionDefinition {
        id: Criterion::PublicTransportAccess,
        label: "Tilgang Offentlig Transport",
        description: "Nærhet og frekvens for buss, bane, tog (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::SchoolsProximity,
        label: "Nærhet Skoler/Barnehager",
        description: "Tilgjengelighet og kvalitet på skoler/barnehager (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::ViewingImpression,
        label: "Inntrykk på Visning",
        description: "Subjektivt helhetsinntrykk fra visningen (0-10 poeng).",
        max_weight: Some(15),
    },
    CriterionDefinition {
        id: Criterion::Potential,
        label: "Potensial",
        description: "Muligheter for utbygging, modernisering eller verdivekst (0-10 poeng).",
        max_weight: Some(15),
    },
];
