// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::menu::{MenuCategory, MenuItem, MenuTag};
use crate::server::AppState;
use crate::site::{SITE, STORY_CHAPTERS};

fn render<T: Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    }))
}

// ============================================================================
// View Models
// ============================================================================

/// One item row, with tags pre-resolved for the template
pub struct ItemView {
    pub name: String,
    pub description: Option<String>,
    pub price_label: String,
    pub veg: bool,
    pub non_veg: bool,
    pub spicy: bool,
    pub special: bool,
}

impl ItemView {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price_label: item.price_label(),
            veg: item.has_tag(MenuTag::Veg),
            non_veg: item.has_tag(MenuTag::NonVeg),
            spicy: item.has_tag(MenuTag::Spicy),
            special: item.has_tag(MenuTag::SukinoSpecial),
        }
    }
}

/// One section heading plus its items. A flat category renders as a single
/// unnamed section.
pub struct SectionView {
    pub name: Option<String>,
    pub description: Option<String>,
    pub items: Vec<ItemView>,
}

impl SectionView {
    fn build_all(category: &MenuCategory) -> Vec<SectionView> {
        match category.sections() {
            Some(sections) => sections
                .iter()
                .map(|s| SectionView {
                    name: Some(s.name.clone()),
                    description: s.description.clone(),
                    items: s.items.iter().map(ItemView::from_item).collect(),
                })
                .collect(),
            None => vec![SectionView {
                name: None,
                description: None,
                items: category.items().into_iter().map(ItemView::from_item).collect(),
            }],
        }
    }
}

/// Category pill in the navigation strip
pub struct CategoryLink {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

pub struct ChapterView {
    pub content: &'static str,
    pub css_class: &'static str,
    pub highlight: bool,
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub tagline: &'static str,
    pub locality: &'static str,
    pub specials: Vec<ItemView>,
}

pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let specials = state
        .catalog
        .items_with_tag(MenuTag::SukinoSpecial)
        .into_iter()
        .take(6)
        .map(ItemView::from_item)
        .collect();

    render(HomeTemplate {
        title: "Home".to_string(),
        tagline: SITE.tagline,
        locality: SITE.locality,
        specials,
    })
}

// ============================================================================
// Menu Page
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/menu.html")]
pub struct MenuTemplate {
    pub title: String,
    pub categories: Vec<CategoryLink>,
    pub category_name: String,
    pub category_description: String,
    pub sections: Vec<SectionView>,
}

pub async fn menu_page(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    let catalog = &state.catalog;

    // Unknown or missing category id falls back to the first catalog entry
    let current = query
        .category
        .as_deref()
        .and_then(|id| catalog.category(id))
        .or_else(|| catalog.categories().first());

    let categories = catalog
        .categories()
        .iter()
        .map(|c| CategoryLink {
            id: c.id.clone(),
            name: c.name.clone(),
            selected: current.map(|cur| cur.id == c.id).unwrap_or(false),
        })
        .collect();

    let (category_name, category_description, sections) = match current {
        Some(category) => (
            category.name.clone(),
            category.description.clone(),
            SectionView::build_all(category),
        ),
        None => (String::new(), String::new(), Vec::new()),
    };

    render(MenuTemplate {
        title: "Menu".to_string(),
        categories,
        category_name,
        category_description,
        sections,
    })
}

// ============================================================================
// Our Story Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/our_story.html")]
pub struct OurStoryTemplate {
    pub title: String,
    pub chapters: Vec<ChapterView>,
}

pub async fn our_story_page() -> impl IntoResponse {
    let chapters = STORY_CHAPTERS
        .iter()
        .map(|c| ChapterView {
            content: c.content,
            css_class: c.position.css_class(),
            highlight: c.highlight,
        })
        .collect();

    render(OurStoryTemplate {
        title: "Our Story".to_string(),
        chapters,
    })
}

// ============================================================================
// Visit Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/visit.html")]
pub struct VisitTemplate {
    pub title: String,
    pub locality: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub instagram_handle: &'static str,
    pub instagram_url: &'static str,
    pub hours_days: &'static str,
    pub hours_times: &'static str,
}

pub async fn visit_page() -> impl IntoResponse {
    render(VisitTemplate {
        title: "Visit Us".to_string(),
        locality: SITE.locality,
        address: SITE.address,
        phone: SITE.phone,
        phone_href: SITE.phone_href,
        instagram_handle: SITE.instagram_handle,
        instagram_url: SITE.instagram_url,
        hours_days: SITE.hours_days,
        hours_times: SITE.hours_times,
    })
}
