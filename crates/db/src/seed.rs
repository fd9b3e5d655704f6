//! Fixture catalog loaded into the memory store at startup and, on request,
//! into PostgreSQL.
//!
//! Both backends load the same fixtures in the same order so that ids,
//! flags and creation times line up between them.

use appdir_core::catalog::ProjectStatus;
use appdir_core::types::{DbId, Timestamp};
use chrono::Duration;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::project::Project;

/// A fixture category.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub icon: &'static str,
    pub slug: &'static str,
}

/// A fixture project. `category_slug` is resolved to an id at load time.
#[derive(Debug, Clone, Copy)]
pub struct ProjectSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub developer: &'static str,
    pub developer_email: &'static str,
    pub developer_twitter: &'static str,
    pub developer_github: &'static str,
    pub developer_website: &'static str,
    pub image_url: &'static str,
    pub external_url: &'static str,
    pub github_url: &'static str,
    pub category_slug: &'static str,
    pub rating: i32,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_trending: bool,
    pub tags: &'static [&'static str],
    pub status: ProjectStatus,
    /// How long before load time the project was created.
    pub age_days: i64,
}

impl CategorySeed {
    pub fn to_category(self, id: DbId) -> Category {
        Category {
            id,
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            slug: self.slug.to_string(),
        }
    }
}

impl ProjectSeed {
    /// Creation time relative to `now`.
    pub fn created_at(&self, now: Timestamp) -> Timestamp {
        now - Duration::days(self.age_days)
    }

    pub fn to_project(self, id: DbId, category_id: DbId, now: Timestamp) -> Project {
        Project {
            id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            short_description: self.short_description.to_string(),
            developer: self.developer.to_string(),
            developer_email: Some(self.developer_email.to_string()),
            developer_twitter: Some(self.developer_twitter.to_string()),
            developer_github: Some(self.developer_github.to_string()),
            developer_website: Some(self.developer_website.to_string()),
            image_url: self.image_url.to_string(),
            external_url: Some(self.external_url.to_string()),
            github_url: Some(self.github_url.to_string()),
            category_id,
            rating: self.rating,
            is_featured: self.is_featured,
            is_new: self.is_new,
            is_trending: self.is_trending,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            status: self.status,
            created_at: self.created_at(now),
        }
    }
}

pub const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Image Generation",
        icon: "🎨",
        slug: "image-generation",
    },
    CategorySeed {
        name: "Chat Interfaces",
        icon: "💬",
        slug: "chat-interfaces",
    },
    CategorySeed {
        name: "Developer Tools",
        icon: "🔧",
        slug: "developer-tools",
    },
    CategorySeed {
        name: "Document Analysis",
        icon: "📄",
        slug: "document-analysis",
    },
    CategorySeed {
        name: "AI Utilities",
        icon: "⚡",
        slug: "ai-utilities",
    },
];

pub const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        name: "Standalone Image Upscaler/Enhancer",
        description: "A focused application for upscaling and enhancing images with Venice's AI \
                      models. Batch processing, several upscaling algorithms, noise reduction and \
                      quality optimisation without the weight of a full generation suite.",
        short_description: "Specialized tool for AI-powered image upscaling and enhancement with \
                            professional-grade results.",
        developer: "ImageTech Solutions",
        developer_email: "contact@imagetech.solutions",
        developer_twitter: "@ImageTechAI",
        developer_github: "imagetech-solutions",
        developer_website: "https://imagetech.solutions",
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?auto=format&fit=crop&w=800&h=400",
        external_url: "https://upscaler.venice.ai",
        github_url: "https://github.com/venice-ai/image-upscaler",
        category_slug: "image-generation",
        rating: 47,
        is_featured: true,
        is_new: false,
        is_trending: true,
        tags: &["Image Enhancement", "Upscaling", "AI Processing", "Batch Processing"],
        status: ProjectStatus::Approved,
        age_days: 30,
    },
    ProjectSeed {
        name: "Automatic1111 Integration",
        description: "Brings Venice's image models into the Automatic1111 UI so its existing \
                      community can keep their workflows, custom models and advanced parameter \
                      controls.",
        short_description: "Venice.ai integration for Automatic1111 UI with full workflow \
                            compatibility.",
        developer: "VeniceUI Collective",
        developer_email: "team@veniceui.dev",
        developer_twitter: "@VeniceUITeam",
        developer_github: "venice-ui-collective",
        developer_website: "https://veniceui.dev",
        image_url: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?auto=format&fit=crop&w=800&h=400",
        external_url: "https://auto1111.venice.ai",
        github_url: "https://github.com/venice-ai/automatic1111-integration",
        category_slug: "image-generation",
        rating: 48,
        is_featured: true,
        is_new: false,
        is_trending: false,
        tags: &["Automatic1111", "Integration", "Advanced Controls", "Community"],
        status: ProjectStatus::Approved,
        age_days: 21,
    },
    ProjectSeed {
        name: "Advanced Image Studio",
        description: "A standalone image generation studio built for the Venice ecosystem, with \
                      prompt engineering tools, style presets, batch generation and integrated \
                      workflow management.",
        short_description: "Professional-grade standalone image generation studio with advanced \
                            controls.",
        developer: "Venice Studios",
        developer_email: "studio@venice.ai",
        developer_twitter: "@VeniceStudios",
        developer_github: "venice-studios",
        developer_website: "https://studio.venice.ai",
        image_url: "https://images.unsplash.com/photo-1541701494587-cb58502866ab?auto=format&fit=crop&w=800&h=400",
        external_url: "https://studio.venice.ai",
        github_url: "https://github.com/venice-ai/advanced-image-studio",
        category_slug: "image-generation",
        rating: 49,
        is_featured: true,
        is_new: true,
        is_trending: true,
        tags: &["Professional Tools", "Advanced Interface", "Workflow Management", "Studio"],
        status: ProjectStatus::Approved,
        age_days: 3,
    },
    ProjectSeed {
        name: "Retro 80's Cyberpunk Chat Interface",
        description: "An alternative Venice chat client wrapped in a neon-lit 80's cyberpunk \
                      aesthetic, with custom animations and retro sound effects.",
        short_description: "Immersive retro cyberpunk chat interface with stunning 80's \
                            aesthetics.",
        developer: "Neon Dreams Interactive",
        developer_email: "hello@neondreams.io",
        developer_twitter: "@NeonDreamsIO",
        developer_github: "neon-dreams-interactive",
        developer_website: "https://neondreams.io",
        image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&w=800&h=400",
        external_url: "https://retro.venice.ai",
        github_url: "https://github.com/venice-ai/retro-chat-interface",
        category_slug: "chat-interfaces",
        rating: 46,
        is_featured: false,
        is_new: true,
        is_trending: false,
        tags: &["Retro Design", "Cyberpunk", "Alternative UI", "Interactive"],
        status: ProjectStatus::Approved,
        age_days: 7,
    },
    ProjectSeed {
        name: "PDF Intelligence Tool",
        description: "Side-by-side PDF reading with an AI assistant for question answering, \
                      summarisation and insight extraction across long documents and books.",
        short_description: "AI-powered PDF analysis tool with side-by-side reading and \
                            intelligent assistance.",
        developer: "DocuMind AI",
        developer_email: "support@documind.ai",
        developer_twitter: "@DocuMindAI",
        developer_github: "documind-ai",
        developer_website: "https://documind.ai",
        image_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?auto=format&fit=crop&w=800&h=400",
        external_url: "https://pdf.venice.ai",
        github_url: "https://github.com/venice-ai/pdf-intelligence-tool",
        category_slug: "document-analysis",
        rating: 48,
        is_featured: false,
        is_new: false,
        is_trending: true,
        tags: &["Document Analysis", "PDF Processing", "Research Tools", "AI Assistant"],
        status: ProjectStatus::Approved,
        age_days: 14,
    },
];

/// Position of the category with `slug` in [`CATEGORIES`], as a 1-based id.
///
/// Fixture ids are assigned in declaration order, so this is the id the
/// category receives in a freshly seeded store.
pub fn fixture_category_id(slug: &str) -> Option<DbId> {
    CATEGORIES
        .iter()
        .position(|c| c.slug == slug)
        .map(|idx| idx as DbId + 1)
}

/// Replace the contents of the PostgreSQL catalog with the fixtures.
///
/// Identity sequences are reset so the fixture ids match the memory store.
pub async fn seed_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let now = chrono::Utc::now();
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE projects, categories RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    for category in CATEGORIES {
        sqlx::query("INSERT INTO categories (name, icon, slug) VALUES ($1, $2, $3)")
            .bind(category.name)
            .bind(category.icon)
            .bind(category.slug)
            .execute(&mut *tx)
            .await?;
    }

    for project in PROJECTS {
        let tags: Vec<&str> = project.tags.to_vec();
        sqlx::query(
            "INSERT INTO projects (\
                name, description, short_description, developer, \
                developer_email, developer_twitter, developer_github, developer_website, \
                image_url, external_url, github_url, category_id, \
                rating, is_featured, is_new, is_trending, tags, status, created_at\
             ) \
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, c.id, \
                    $13, $14, $15, $16, $17, $18, $19 \
             FROM categories c WHERE c.slug = $12",
        )
        .bind(project.name)
        .bind(project.description)
        .bind(project.short_description)
        .bind(project.developer)
        .bind(project.developer_email)
        .bind(project.developer_twitter)
        .bind(project.developer_github)
        .bind(project.developer_website)
        .bind(project.image_url)
        .bind(project.external_url)
        .bind(project.github_url)
        .bind(project.category_slug)
        .bind(project.rating)
        .bind(project.is_featured)
        .bind(project.is_new)
        .bind(project.is_trending)
        .bind(&tags)
        .bind(project.status.as_str())
        .bind(project.created_at(now))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        categories = CATEGORIES.len(),
        projects = PROJECTS.len(),
        "Seeded catalog fixtures"
    );
    Ok(())
}
