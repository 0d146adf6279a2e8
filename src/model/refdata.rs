//! Reference vocabularies supplied by the surrounding catalog.
//!
//! The parser treats these as immutable read-only lists for the duration of
//! one parse. Alternate-name tables carry localized and historical spellings
//! that label printers actually use.

use serde::{Deserialize, Serialize};

fn default_public() -> bool {
    true
}

/// A macro tea category (green, oolong, puer, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog id.
    pub id: u32,
    /// Canonical name.
    pub name: String,
}

/// An alternate spelling of a category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryName {
    /// Alternate spelling.
    pub name: String,
    /// Category this spelling refers to.
    pub category_id: u32,
}

/// A tea subcategory (Dan Cong, Long Jing, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Catalog id.
    pub id: u32,
    /// Canonical name.
    pub name: String,
    /// Western-script transliteration; may be empty.
    #[serde(default)]
    pub translated_name: String,
    /// Parent category, when declared.
    #[serde(default)]
    pub category_id: Option<u32>,
    /// Whether the record is visible outside its owner's catalog.
    #[serde(default = "default_public")]
    pub is_public: bool,
}

/// An alternate spelling of a subcategory name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryName {
    /// Alternate spelling.
    pub name: String,
    /// Subcategory this spelling refers to.
    pub subcategory_id: u32,
}

/// A tea vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Catalog id.
    pub id: u32,
    /// Vendor name.
    pub name: String,
    /// Vendor website; may be empty.
    #[serde(default)]
    pub website: String,
    /// Whether the record is visible outside its owner's catalog.
    #[serde(default = "default_public")]
    pub is_public: bool,
}

/// A trademark or product-line phrase printed by a vendor.
///
/// Trademark words are stripped during cleaning so they do not leak into the
/// guessed product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorTrademark {
    /// Trademark phrase.
    pub name: String,
    /// Owning vendor.
    pub vendor_id: u32,
}

/// The full reference snapshot for one parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Known categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Alternate category spellings.
    #[serde(default)]
    pub category_names: Vec<CategoryName>,
    /// Known subcategories.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// Alternate subcategory spellings.
    #[serde(default)]
    pub subcategory_names: Vec<SubcategoryName>,
    /// Known vendors.
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    /// Vendor trademarks.
    #[serde(default)]
    pub vendor_trademarks: Vec<VendorTrademark>,
}

impl ReferenceData {
    /// Subcategories visible to this parse.
    pub fn public_subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.iter().filter(|s| s.is_public)
    }

    /// Vendors visible to this parse.
    pub fn public_vendors(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.iter().filter(|v| v.is_public)
    }

    /// Lowercased category lookup vocabulary: canonical plus alternate names.
    pub fn category_vocabulary(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .categories
            .iter()
            .map(|c| c.name.to_lowercase())
            .collect();
        names.extend(self.category_names.iter().map(|c| c.name.to_lowercase()));
        names
    }

    /// Lowercased subcategory lookup vocabulary: canonical names, translated
    /// names and alternate spellings.
    pub fn subcategory_vocabulary(&self) -> Vec<String> {
        let mut names = Vec::new();
        for sub in self.public_subcategories() {
            names.push(sub.name.to_lowercase());
            if !sub.translated_name.is_empty() {
                names.push(sub.translated_name.to_lowercase());
            }
        }
        names.extend(self.subcategory_names.iter().map(|s| s.name.to_lowercase()));
        names
    }

    /// Lowercased vendor lookup vocabulary: names plus websites.
    pub fn vendor_vocabulary(&self) -> Vec<String> {
        let mut names = Vec::new();
        for vendor in self.public_vendors() {
            names.push(vendor.name.to_lowercase());
            if !vendor.website.is_empty() {
                names.push(vendor.website.to_lowercase());
            }
        }
        names
    }

    /// Resolve a matched category string, alternate-name table first.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        if let Some(alt) = self
            .category_names
            .iter()
            .find(|c| c.name.to_lowercase() == name)
        {
            if let Some(category) = self.category_by_id(alt.category_id) {
                return Some(category);
            }
        }
        self.categories.iter().find(|c| c.name.to_lowercase() == name)
    }

    /// Resolve a matched subcategory string, alternate-name table first, then
    /// canonical or translated name.
    pub fn subcategory_by_name(&self, name: &str) -> Option<&Subcategory> {
        if let Some(alt) = self
            .subcategory_names
            .iter()
            .find(|s| s.name.to_lowercase() == name)
        {
            if let Some(sub) = self.subcategory_by_id(alt.subcategory_id) {
                return Some(sub);
            }
        }
        self.public_subcategories().find(|s| {
            s.name.to_lowercase() == name || s.translated_name.to_lowercase() == name
        })
    }

    /// Resolve a matched vendor string by name or website.
    pub fn vendor_by_name_or_website(&self, name: &str) -> Option<&Vendor> {
        self.public_vendors()
            .find(|v| v.name.to_lowercase() == name || v.website.to_lowercase() == name)
    }

    /// Look up a category by id.
    pub fn category_by_id(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a public subcategory by id.
    pub fn subcategory_by_id(&self, id: u32) -> Option<&Subcategory> {
        self.public_subcategories().find(|s| s.id == id)
    }

    /// Look up a public vendor by id.
    pub fn vendor_by_id(&self, id: u32) -> Option<&Vendor> {
        self.public_vendors().find(|v| v.id == id)
    }

    /// Individual lowercased words of every trademark phrase of a vendor.
    pub fn trademark_words_for(&self, vendor_id: u32) -> Vec<String> {
        let mut words = Vec::new();
        for trademark in self
            .vendor_trademarks
            .iter()
            .filter(|t| t.vendor_id == vendor_id)
        {
            for word in trademark.name.to_lowercase().split_whitespace() {
                words.push(word.to_string());
            }
        }
        words
    }

    /// Every name a subcategory answers to, in catalog casing: canonical,
    /// translated and alternate spellings.
    pub fn subcategory_alternate_names(&self, subcategory: &Subcategory) -> Vec<String> {
        let mut names = vec![subcategory.name.clone()];
        if !subcategory.translated_name.is_empty() {
            names.push(subcategory.translated_name.clone());
        }
        names.extend(
            self.subcategory_names
                .iter()
                .filter(|s| s.subcategory_id == subcategory.id)
                .map(|s| s.name.clone()),
        );
        names
    }
}
