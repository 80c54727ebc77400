use crate::{config::args::ProfileNames, foundation::core::Rgba8, model::kind::RenderableKind};

/// Fill/border/text triple for one kind, with the dimmed variants used under an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindColors {
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub text: Rgba8,
    /// Fill of objects not hit by the active analysis.
    pub lighter_fill: Rgba8,
    pub lighter_text: Rgba8,
}

impl KindColors {
    const fn new(fill: u32, stroke: u32, text: u32, lighter_fill: u32, lighter_text: u32) -> Self {
        Self {
            fill: Rgba8::hex(fill),
            stroke: Rgba8::hex(stroke),
            text: Rgba8::hex(text),
            lighter_fill: Rgba8::hex(lighter_fill),
            lighter_text: Rgba8::hex(lighter_text),
        }
    }
}

/// Diagram palette: colors per object kind plus decoration colors.
#[derive(Debug)]
pub struct ColorProfile {
    pub name: &'static str,
    pub protein: KindColors,
    pub gene: KindColors,
    pub rna: KindColors,
    pub chemical: KindColors,
    pub complex: KindColors,
    pub entity: KindColors,
    pub entity_set: KindColors,
    pub process_node: KindColors,
    pub encapsulated_node: KindColors,
    pub cell: KindColors,
    pub compartment: KindColors,
    pub note: KindColors,
    pub reaction: KindColors,
    pub link: KindColors,
    pub attachment: KindColors,
    pub stoichiometry: KindColors,
    pub disease: Rgba8,
    pub selection: Rgba8,
    pub halo: Rgba8,
    pub flag: Rgba8,
}

impl ColorProfile {
    pub fn colors(&self, kind: RenderableKind) -> &KindColors {
        use RenderableKind as K;
        match kind {
            K::Protein | K::ProteinDrug => &self.protein,
            K::Gene => &self.gene,
            K::Rna | K::RnaDrug => &self.rna,
            K::Chemical | K::ChemicalDrug => &self.chemical,
            K::Complex | K::ComplexDrug => &self.complex,
            K::Entity => &self.entity,
            K::EntitySet | K::EntitySetDrug => &self.entity_set,
            K::ProcessNode => &self.process_node,
            K::EncapsulatedNode => &self.encapsulated_node,
            K::Cell => &self.cell,
            K::Compartment => &self.compartment,
            K::Note => &self.note,
            K::Reaction => &self.reaction,
            K::EntitySetAndMemberLink
            | K::EntitySetAndEntitySetLink
            | K::Interaction
            | K::FlowLine => &self.link,
        }
    }

    pub fn by_name(name: &str) -> Option<&'static ColorProfile> {
        let key = normalize_name(name);
        DIAGRAM_PROFILES.iter().find(|p| p.name == key)
    }
}

/// Two- or three-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub min: Rgba8,
    pub stop: Option<Rgba8>,
    pub max: Rgba8,
}

impl Gradient {
    /// Color at `t` in `[0, 1]` (clamped), `0` being the minimum.
    pub fn color_at(&self, t: f64) -> Rgba8 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self.stop {
            Some(stop) if t < 0.5 => self.min.lerp(stop, t * 2.0),
            Some(stop) => stop.lerp(self.max, (t - 0.5) * 2.0),
            None => self.min.lerp(self.max, t),
        }
    }
}

/// Analysis palette: expression gradient and enrichment hit color.
#[derive(Debug)]
pub struct AnalysisProfile {
    pub name: &'static str,
    pub expression: Gradient,
    pub enrichment: Rgba8,
    pub hit_text: Rgba8,
    pub legend_border: Rgba8,
    pub legend_text: Rgba8,
}

impl AnalysisProfile {
    pub fn by_name(name: &str) -> Option<&'static AnalysisProfile> {
        let key = normalize_name(name);
        ANALYSIS_PROFILES.iter().find(|p| p.name == key)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['_', '-'], " ")
}

/// Palettes selected for one render.
#[derive(Clone, Copy, Debug)]
pub struct ColorProfiles {
    pub diagram: &'static ColorProfile,
    pub analysis: &'static AnalysisProfile,
}

impl ColorProfiles {
    /// Resolve palette names; unknown names fall back to the standard palettes.
    pub fn resolve(names: &ProfileNames) -> Self {
        let diagram = ColorProfile::by_name(&names.diagram).unwrap_or_else(|| {
            tracing::warn!(profile = %names.diagram, "unknown diagram profile, using standard");
            &DIAGRAM_PROFILES[0]
        });
        let analysis = AnalysisProfile::by_name(&names.analysis).unwrap_or_else(|| {
            tracing::warn!(profile = %names.analysis, "unknown analysis profile, using standard");
            &ANALYSIS_PROFILES[0]
        });
        Self { diagram, analysis }
    }
}

impl Default for ColorProfiles {
    fn default() -> Self {
        Self {
            diagram: &DIAGRAM_PROFILES[0],
            analysis: &ANALYSIS_PROFILES[0],
        }
    }
}

pub static DIAGRAM_PROFILES: [ColorProfile; 2] = [
    ColorProfile {
        name: "standard",
        protein: KindColors::new(0x8FC0B0, 0x2F6F5F, 0x000000, 0xE0EEEA, 0x7A7A7A),
        gene: KindColors::new(0xA8CFE0, 0x1F5F7F, 0x000000, 0xE5F1F6, 0x7A7A7A),
        rna: KindColors::new(0xA6B7DA, 0x2F3F7F, 0x000000, 0xE4E9F3, 0x7A7A7A),
        chemical: KindColors::new(0xA0BBCD, 0x3F5F7F, 0x000000, 0xE3EBF0, 0x7A7A7A),
        complex: KindColors::new(0x9ED6A0, 0x2F7F35, 0x000000, 0xE2F3E3, 0x7A7A7A),
        entity: KindColors::new(0xB8BBBD, 0x5F5F5F, 0x000000, 0xEAEBEB, 0x7A7A7A),
        entity_set: KindColors::new(0xA0BBCD, 0x3F5F7F, 0x000000, 0xE3EBF0, 0x7A7A7A),
        process_node: KindColors::new(0xD2FFD2, 0x2F7F35, 0x000000, 0xF0FFF0, 0x7A7A7A),
        encapsulated_node: KindColors::new(0xD2FFD2, 0x2F7F35, 0x000000, 0xF0FFF0, 0x7A7A7A),
        cell: KindColors::new(0xF5E7C3, 0x8F6F2F, 0x000000, 0xFBF5E7, 0x7A7A7A),
        compartment: KindColors::new(0xFFFAF0, 0xF0B400, 0x6F4F00, 0xFFFDF7, 0x9F8F6F),
        note: KindColors::new(0xFFFFFF, 0x000000, 0x000000, 0xFFFFFF, 0x7A7A7A),
        reaction: KindColors::new(0xFFFFFF, 0x000000, 0x000000, 0xFFFFFF, 0x7A7A7A),
        link: KindColors::new(0xFFFFFF, 0x7F7F7F, 0x000000, 0xFFFFFF, 0x7A7A7A),
        attachment: KindColors::new(0xFFFFFF, 0x000000, 0x000000, 0xFFFFFF, 0x7A7A7A),
        stoichiometry: KindColors::new(0xFFFFFF, 0x000000, 0x000000, 0xFFFFFF, 0x7A7A7A),
        disease: Rgba8::hex(0xFF0000),
        selection: Rgba8::hex(0x0000FF),
        halo: Rgba8::hex(0xE0E0FF),
        flag: Rgba8::hex(0xFF00FF),
    },
    ColorProfile {
        name: "modern",
        protein: KindColors::new(0xFFFFFF, 0x005B8F, 0x005B8F, 0xF2F7FA, 0x9AB0C0),
        gene: KindColors::new(0xFFFFFF, 0x6A3D9A, 0x6A3D9A, 0xF5F1F9, 0xA99BBE),
        rna: KindColors::new(0xFFFFFF, 0x1F78B4, 0x1F78B4, 0xF1F6FB, 0x9BB7CC),
        chemical: KindColors::new(0xFFFFFF, 0x33A02C, 0x33A02C, 0xF2F9F1, 0xA2C79F),
        complex: KindColors::new(0xFFFFFF, 0xB15928, 0xB15928, 0xFAF4F0, 0xC9A78F),
        entity: KindColors::new(0xFFFFFF, 0x666666, 0x333333, 0xF5F5F5, 0xA0A0A0),
        entity_set: KindColors::new(0xFFFFFF, 0x1F78B4, 0x1F78B4, 0xF1F6FB, 0x9BB7CC),
        process_node: KindColors::new(0xFFFFFF, 0x33A02C, 0x33A02C, 0xF2F9F1, 0xA2C79F),
        encapsulated_node: KindColors::new(0xFFFFFF, 0x33A02C, 0x33A02C, 0xF2F9F1, 0xA2C79F),
        cell: KindColors::new(0xFFFFFF, 0xB15928, 0xB15928, 0xFAF4F0, 0xC9A78F),
        compartment: KindColors::new(0xF7F9FC, 0xC7D2E5, 0x5A6A80, 0xFBFCFE, 0xA5B0C0),
        note: KindColors::new(0xFFFFFF, 0x333333, 0x333333, 0xFFFFFF, 0xA0A0A0),
        reaction: KindColors::new(0xFFFFFF, 0x4A4A4A, 0x4A4A4A, 0xFFFFFF, 0xA0A0A0),
        link: KindColors::new(0xFFFFFF, 0x9A9A9A, 0x4A4A4A, 0xFFFFFF, 0xA0A0A0),
        attachment: KindColors::new(0xFFFFFF, 0x4A4A4A, 0x4A4A4A, 0xFFFFFF, 0xA0A0A0),
        stoichiometry: KindColors::new(0xFFFFFF, 0x4A4A4A, 0x4A4A4A, 0xFFFFFF, 0xA0A0A0),
        disease: Rgba8::hex(0xE31A1C),
        selection: Rgba8::hex(0x1F78B4),
        halo: Rgba8::hex(0xD6E6F5),
        flag: Rgba8::hex(0xFF7F00),
    },
];

pub static ANALYSIS_PROFILES: [AnalysisProfile; 3] = [
    AnalysisProfile {
        name: "standard",
        expression: Gradient {
            min: Rgba8::hex(0xFFFF00),
            stop: None,
            max: Rgba8::hex(0x0000FF),
        },
        enrichment: Rgba8::hex(0xFFA500),
        hit_text: Rgba8::hex(0x000000),
        legend_border: Rgba8::hex(0x000000),
        legend_text: Rgba8::hex(0x000000),
    },
    AnalysisProfile {
        name: "strosobar",
        expression: Gradient {
            min: Rgba8::hex(0x0000FF),
            stop: Some(Rgba8::hex(0xFFFF00)),
            max: Rgba8::hex(0xFF0000),
        },
        enrichment: Rgba8::hex(0xFFFF00),
        hit_text: Rgba8::hex(0x000000),
        legend_border: Rgba8::hex(0x333333),
        legend_text: Rgba8::hex(0x333333),
    },
    AnalysisProfile {
        name: "copper plus",
        expression: Gradient {
            min: Rgba8::hex(0x000000),
            stop: Some(Rgba8::hex(0xB87333)),
            max: Rgba8::hex(0xFFF0D0),
        },
        enrichment: Rgba8::hex(0xB87333),
        hit_text: Rgba8::hex(0xFFFFFF),
        legend_border: Rgba8::hex(0x000000),
        legend_text: Rgba8::hex(0x000000),
    },
];

#[cfg(test)]
#[path = "../../tests/unit/profiles/color.rs"]
mod tests;
