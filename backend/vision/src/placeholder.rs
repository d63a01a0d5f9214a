//! Locale-aware placeholder text and the model prompt.
//!
//! The marketplaces served are Turkish, so Turkish is the default locale, but
//! nothing downstream assumes one language: prompt and placeholders always
//! come from the same locale, so a degraded description reads consistently.

use snapfind_core::{Locale, ProductDescription};

/// Fixed fallback values used when the model gives us less than a full
/// structured description.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderText {
    pub name: &'static str,
    pub category: &'static str,
    pub feature: &'static str,
    pub brand: &'static str,
    pub color: &'static str,
    pub style: &'static str,
    pub material: &'static str,
}

const TR: PlaceholderText = PlaceholderText {
    name: "Resimdeki ürün",
    category: "Genel",
    feature: "Resim tabanlı ürün",
    brand: "Bilinmiyor",
    color: "Çeşitli",
    style: "Standart",
    material: "Bilinmiyor",
};

const EN: PlaceholderText = PlaceholderText {
    name: "Item in picture",
    category: "General",
    feature: "Image-based product",
    brand: "Unknown",
    color: "Assorted",
    style: "Standard",
    material: "Unknown",
};

pub fn placeholders(locale: Locale) -> &'static PlaceholderText {
    match locale {
        Locale::Tr => &TR,
        Locale::En => &EN,
    }
}

/// Full placeholder description (Tier 3: every field is a fallback).
pub fn default_description(locale: Locale) -> ProductDescription {
    let p = placeholders(locale);
    ProductDescription {
        name: p.name.to_string(),
        category: Some(p.category.to_string()),
        features: vec![p.feature.to_string()],
        brand: Some(p.brand.to_string()),
        color: Some(p.color.to_string()),
        style: Some(p.style.to_string()),
        material: Some(p.material.to_string()),
    }
}

const PROMPT_TR: &str = r#"Bu resmi analiz et ve görünen ana ürünü veya nesneyi tanımla.
Türkçe olarak detaylı bir açıklama sağla:
1. Ürün adı ve türü
2. Ana özellikler ve karakteristikler
3. Marka (tanımlanabilirse)
4. Renk ve stil
5. Malzeme (uygulanabilirse)

Yanıtınızı bu alanlarla JSON formatında verin:
{
    "product_name": "ürün_adı",
    "product_type": "kategori",
    "features": ["özellik1", "özellik2"],
    "brand": "marka_adı",
    "color": "renk_açıklaması",
    "style": "stil_açıklaması",
    "material": "malzeme_açıklaması"
}

Lütfen ürün adını Türkçe olarak verin."#;

const PROMPT_EN: &str = r#"Analyze this image and identify the main product or object in it.
Provide a detailed description in English:
1. Product name and type
2. Main features and characteristics
3. Brand (if identifiable)
4. Color and style
5. Material (if applicable)

Return your answer as a JSON object with these fields:
{
    "product_name": "product_name",
    "product_type": "category",
    "features": ["feature1", "feature2"],
    "brand": "brand_name",
    "color": "color_description",
    "style": "style_description",
    "material": "material_description"
}

Please give the product name in English."#;

/// The fixed instruction sent with every image.
pub fn prompt_for(locale: Locale) -> &'static str {
    match locale {
        Locale::Tr => PROMPT_TR,
        Locale::En => PROMPT_EN,
    }
}
