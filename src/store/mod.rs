pub mod seed;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use crate::models::{BlogArticle, JobApplication, JobOpening, Product, Project, Service, User};

/// One in-memory table: records keyed by their assigned identifier plus the
/// id sequence. Identifiers are never reused within a process lifetime.
pub struct Collection<T> {
    rows: RwLock<BTreeMap<i32, T>>,
    next_id: AtomicI32,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Assigns the next identifier and inserts the record the builder returns.
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i32) -> T,
    {
        let mut rows = self.rows.write().expect("store lock poisoned");
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        rows.insert(id, row.clone());
        row
    }

    /// Like insert_with, but refuses when an existing record matches the
    /// conflict predicate. Check and insert happen under one write lock.
    pub fn insert_guarded<P, F>(&self, conflicts: P, build: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(i32) -> T,
    {
        let mut rows = self.rows.write().expect("store lock poisoned");
        if rows.values().any(|row| conflicts(row)) {
            return None;
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        rows.insert(id, row.clone());
        Some(row)
    }

    pub fn get(&self, id: i32) -> Option<T> {
        self.rows.read().expect("store lock poisoned").get(&id).cloned()
    }

    /// All records in identifier order.
    pub fn all(&self) -> Vec<T> {
        self.rows.read().expect("store lock poisoned").values().cloned().collect()
    }

    pub fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .expect("store lock poisoned")
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    pub fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .expect("store lock poisoned")
            .values()
            .find(|row| pred(row))
            .cloned()
    }

    /// Applies a merge to the record in place; last writer wins. Returns the
    /// updated record, or None when the id is unknown.
    pub fn update_with<F>(&self, id: i32, merge: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().expect("store lock poisoned");
        let row = rows.get_mut(&id)?;
        merge(row);
        Some(row.clone())
    }

    /// Hard delete. Reports absence as false rather than an error so callers
    /// can render "already gone" uniformly.
    pub fn remove(&self, id: i32) -> bool {
        self.rows.write().expect("store lock poisoned").remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted state for the whole backend. Constructed once during process
/// initialization and handed to the router via shared state; seeding is a
/// separate, explicit step (see seed module).
#[derive(Default)]
pub struct Store {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub services: Collection<Service>,
    pub products: Collection<Product>,
    pub job_openings: Collection<JobOpening>,
    pub job_applications: Collection<JobApplication>,
    pub blog_articles: Collection<BlogArticle>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    pub fn featured_projects(&self) -> Vec<Project> {
        self.projects.filter(|project| project.featured)
    }

    pub fn projects_by_category(&self, category: &str) -> Vec<Project> {
        self.projects.filter(|project| project.category == category)
    }

    pub fn popular_products(&self) -> Vec<Product> {
        self.products.filter(|product| product.is_popular)
    }

    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.products.filter(|product| product.category == category)
    }

    pub fn active_job_openings(&self) -> Vec<JobOpening> {
        self.job_openings.filter(|job| job.active)
    }

    pub fn applications_for_job(&self, job_id: i32) -> Vec<JobApplication> {
        self.job_applications
            .filter(|application| application.job_id == Some(job_id))
    }

    pub fn published_articles(&self) -> Vec<BlogArticle> {
        self.blog_articles.filter(|article| article.published)
    }
}
