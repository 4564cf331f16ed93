use serde::Serialize;

pub const DEFAULT_TEMPLATE: &str = "elegant-rose";

#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    pub color_accent: &'static str,
    pub color_bg: &'static str,
    pub color_text: &'static str,
    pub font_display: &'static str,
    pub font_body: &'static str,
    pub is_premium: bool,
}

pub fn all() -> &'static [Template] {
    &TEMPLATES
}

pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

static TEMPLATES: [Template; 5] = [
    Template {
        id: "elegant-rose",
        name: "Elegant Rose",
        category: "Pernikahan",
        description: "Tema rose gold yang elegan dengan ornamen floral.",
        color_primary: "#b76e79",
        color_secondary: "#d4a0a7",
        color_accent: "#c9a96e",
        color_bg: "#fdf2f4",
        color_text: "#2d2d2d",
        font_display: "'Playfair Display', serif",
        font_body: "'Inter', sans-serif",
        is_premium: false,
    },
    Template {
        id: "rustic-garden",
        name: "Rustic Garden",
        category: "Pernikahan",
        description: "Tema greenery dengan nuansa alam yang hangat.",
        color_primary: "#6b8f71",
        color_secondary: "#a8c5a0",
        color_accent: "#c9a96e",
        color_bg: "#f5f7f0",
        color_text: "#2d3527",
        font_display: "'Playfair Display', serif",
        font_body: "'Inter', sans-serif",
        is_premium: false,
    },
    Template {
        id: "modern-minimalist",
        name: "Modern Minimalist",
        category: "Pernikahan",
        description: "Desain clean dan modern dengan tipografi yang kuat.",
        color_primary: "#2d2d2d",
        color_secondary: "#6b6b6b",
        color_accent: "#c9a96e",
        color_bg: "#ffffff",
        color_text: "#1a1a1a",
        font_display: "'Playfair Display', serif",
        font_body: "'Inter', sans-serif",
        is_premium: false,
    },
    Template {
        id: "javanese-royal",
        name: "Javanese Royal",
        category: "Pernikahan",
        description: "Perpaduan motif batik dan aksen emas tradisional.",
        color_primary: "#8B6914",
        color_secondary: "#DAA520",
        color_accent: "#8B0000",
        color_bg: "#FFF8E7",
        color_text: "#2d2518",
        font_display: "'Playfair Display', serif",
        font_body: "'Inter', sans-serif",
        is_premium: true,
    },
    Template {
        id: "dreamy-pastel",
        name: "Dreamy Pastel",
        category: "Pernikahan",
        description: "Nuansa pastel watercolor yang lembut dan dreamy.",
        color_primary: "#b48ec5",
        color_secondary: "#f0b5c8",
        color_accent: "#87CEEB",
        color_bg: "#fdf6fb",
        color_text: "#3a2e3f",
        font_display: "'Playfair Display', serif",
        font_body: "'Inter', sans-serif",
        is_premium: true,
    },
];
