//! Explicit, idempotent seeding. Running either step twice never duplicates
//! rows: the admin account is keyed on username and demo fixtures on their
//! natural titles.

use chrono::Utc;

use crate::auth::{self, AuthError};
use crate::models::{BlogArticle, JobOpening, Project, Service, User};
use crate::store::Store;

/// Ensure the admin account exists. An empty password disables seeding so a
/// production deployment cannot come up with a well-known credential.
pub fn seed_admin(store: &Store, username: &str, password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        tracing::warn!("ADMIN_PASSWORD is empty; no admin account seeded");
        return Ok(());
    }
    if store.user_by_username(username).is_some() {
        return Ok(());
    }

    let hash = auth::hash_password(password)?;
    store.users.insert_guarded(
        |user| user.username == username,
        |id| User {
            id,
            username: username.to_string(),
            password: hash,
            is_admin: true,
            created_at: Utc::now(),
        },
    );
    tracing::info!(username, "seeded admin account");
    Ok(())
}

/// Load the demo catalogue used by development and staging environments.
pub fn seed_demo(store: &Store) {
    for (title, description, category, client, image_url, featured) in [
        (
            "Modern E-commerce Platform",
            "A complete digital shopping experience for a fashion brand",
            "Web Design",
            "Fashion Brand",
            "https://images.unsplash.com/photo-1558655146-d09347e92766?w=600&auto=format&fit=crop",
            true,
        ),
        (
            "NextGen Banking App",
            "Intuitive mobile banking experience with advanced security",
            "Mobile Apps",
            "Financial Services",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=600&auto=format&fit=crop",
            true,
        ),
        (
            "Evergreen Rebranding",
            "Complete brand refresh for an established sustainability company",
            "Brand Identity",
            "Eco Solutions",
            "https://images.unsplash.com/photo-1559028012-481c04fa702d?w=600&auto=format&fit=crop",
            true,
        ),
        (
            "Analytics Dashboard",
            "Data visualization platform for marketing professionals",
            "Web Design",
            "Marketing Agency",
            "https://images.unsplash.com/photo-1559028006-448665bd7c7b?w=600&auto=format&fit=crop",
            false,
        ),
        (
            "Fitness Tracking App",
            "Comprehensive fitness solution with social features",
            "Mobile Apps",
            "Health Tech",
            "https://images.unsplash.com/photo-1553484771-047a44eee27a?w=600&auto=format&fit=crop",
            false,
        ),
        (
            "Culinary Brand Identity",
            "Fresh identity for an upscale restaurant chain",
            "Brand Identity",
            "Restaurant Group",
            "https://images.unsplash.com/photo-1569017388730-020b5f80a004?w=600&auto=format&fit=crop",
            false,
        ),
    ] {
        store.projects.insert_guarded(
            |existing| existing.title == title,
            |id| Project {
                id,
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                client: client.to_string(),
                image_url: image_url.to_string(),
                featured,
                created_at: Utc::now(),
            },
        );
    }

    for (title, description, icon, features) in [
        (
            "Web Development",
            "Custom websites and web applications built with cutting-edge technologies to deliver exceptional user experiences.",
            "laptop-code",
            vec!["Responsive design", "CMS integration", "E-commerce solutions"],
        ),
        (
            "Mobile App Development",
            "Native and cross-platform mobile applications that provide seamless experiences across all devices.",
            "mobile-alt",
            vec!["iOS & Android apps", "React Native & Flutter", "App maintenance & updates"],
        ),
        (
            "UI/UX Design",
            "User-centered design solutions that create intuitive, engaging, and memorable digital experiences.",
            "paint-brush",
            vec!["User research", "Wireframing & prototyping", "Design systems"],
        ),
        (
            "Digital Marketing",
            "Strategic marketing campaigns that increase visibility, drive traffic, and generate leads for your business.",
            "bullhorn",
            vec!["SEO & content strategy", "Social media marketing", "PPC & display advertising"],
        ),
        (
            "Brand Identity",
            "Comprehensive branding solutions that help you establish a strong and distinctive market presence.",
            "layer-group",
            vec!["Logo & visual identity", "Brand guidelines", "Brand messaging"],
        ),
        (
            "Analytics & Optimization",
            "Data-driven insights and optimization strategies to improve performance and ROI of your digital assets.",
            "chart-line",
            vec!["Performance analysis", "Conversion rate optimization", "A/B testing"],
        ),
    ] {
        store.services.insert_guarded(
            |existing| existing.title == title,
            |id| Service {
                id,
                title: title.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                features: features.iter().map(|f| f.to_string()).collect(),
                created_at: Utc::now(),
            },
        );
    }

    for (title, location, job_type, description) in [
        (
            "Senior UI/UX Designer",
            "Remote",
            "Full-time",
            "Create exceptional user experiences for web and mobile applications. Work closely with development teams to bring designs to life.",
        ),
        (
            "Full-Stack Developer",
            "New York",
            "Full-time",
            "Develop modern web applications using JavaScript frameworks. Experience with React, Node.js, and databases required.",
        ),
        (
            "Digital Marketing Specialist",
            "Hybrid",
            "Full-time",
            "Develop and implement digital marketing strategies for our clients. Experience with SEO, PPC, and content marketing required.",
        ),
    ] {
        store.job_openings.insert_guarded(
            |existing| existing.title == title,
            |id| JobOpening {
                id,
                title: title.to_string(),
                location: location.to_string(),
                job_type: job_type.to_string(),
                salary: "Competitive".to_string(),
                description: description.to_string(),
                active: true,
                created_at: Utc::now(),
            },
        );
    }

    for (title, content, excerpt, category, image_url, author_name, author_image_url) in [
        (
            "10 UX Design Trends to Watch in 2023",
            "<p>The world of UX design is constantly evolving, with new trends and technologies emerging all the time. From dark mode and voice interfaces to microinteractions and accessibility-first design, this year's trends reward teams that put users ahead of novelty.</p>",
            "Explore the latest UX design trends that are shaping the digital landscape and how you can implement them in your projects.",
            "Design",
            "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?w=600&auto=format&fit=crop",
            "Sarah Johnson",
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
        (
            "Building Performance-First Web Applications",
            "<p>Users expect websites to load quickly and respond immediately. Optimizing images, trimming JavaScript, caching aggressively, and watching Core Web Vitals turn performance from an afterthought into a feature.</p>",
            "Learn how to optimize your web applications for maximum performance and provide a better user experience.",
            "Development",
            "https://images.unsplash.com/photo-1432888498266-38ffec3eaf0a?w=600&auto=format&fit=crop",
            "David Chen",
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        (
            "The Future of Content Marketing Strategy",
            "<p>Content marketing keeps shifting toward personalization, interactive formats, and data-driven planning. Brands that build communities and repackage their best material across channels will stay ahead of the feed.</p>",
            "Discover how content marketing is evolving and what strategies will help your brand stand out in a crowded digital landscape.",
            "Marketing",
            "https://images.unsplash.com/photo-1520333789090-1afc82db536a?w=600&auto=format&fit=crop",
            "Emily Rodriguez",
            "https://randomuser.me/api/portraits/women/68.jpg",
        ),
    ] {
        store.blog_articles.insert_guarded(
            |existing| existing.title == title,
            |id| BlogArticle {
                id,
                title: title.to_string(),
                content: content.to_string(),
                excerpt: excerpt.to_string(),
                category: category.to_string(),
                image_url: image_url.to_string(),
                author_name: author_name.to_string(),
                author_image_url: author_image_url.to_string(),
                published: true,
                created_at: Utc::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_seed_is_idempotent() {
        let store = Store::new();
        seed_demo(&store);
        let projects = store.projects.len();
        let services = store.services.len();
        seed_demo(&store);
        assert_eq!(store.projects.len(), projects);
        assert_eq!(store.services.len(), services);
        assert_eq!(projects, 6);
        assert_eq!(store.job_openings.len(), 3);
        assert_eq!(store.blog_articles.len(), 3);
    }

    #[test]
    fn admin_seed_is_idempotent_and_privileged() {
        let store = Store::new();
        seed_admin(&store, "admin@pixelperfect.com", "admin123").unwrap();
        seed_admin(&store, "admin@pixelperfect.com", "admin123").unwrap();
        assert_eq!(store.users.len(), 1);
        let admin = store.user_by_username("admin@pixelperfect.com").unwrap();
        assert!(admin.is_admin);
        assert_ne!(admin.password, "admin123");
    }

    #[test]
    fn empty_password_skips_admin_seed() {
        let store = Store::new();
        seed_admin(&store, "admin@pixelperfect.com", "").unwrap();
        assert!(store.users.is_empty());
    }
}
