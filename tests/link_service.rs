use shortlink::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

/// Maps every URL to the same code.
struct ConstantGenerator(&'static str);

impl CodeGenerator for ConstantGenerator {
    fn generate(&self, _normalized_url: &str) -> String {
        self.0.to_string()
    }
}

#[test]
fn test_collisions_append_increasing_suffix() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let service = LinkService::new(repo, ConstantGenerator("samecode"), "https://s.io/");

    let first = service.shorten("https://a.com").unwrap();
    let second = service.shorten("https://b.com").unwrap();
    let third = service.shorten("https://c.com").unwrap();

    assert_eq!(first.code, "samecode");
    assert_eq!(second.code, "samecode1");
    assert_eq!(third.code, "samecode2");
    assert_eq!(third.short_url, "https://s.io/samecode2");

    assert_eq!(service.resolve("samecode").unwrap(), "https://a.com");
    assert_eq!(service.resolve("samecode1").unwrap(), "https://b.com");
    assert_eq!(service.resolve("samecode2").unwrap(), "https://c.com");

    let again = service.shorten("https://b.com").unwrap();
    assert_eq!(again.code, "samecode1");
}

#[test]
fn test_concurrent_shorten_of_distinct_urls() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let service = LinkService::new(repo.clone(), DigestCodeGenerator, "http://localhost:8080");

    let service = &service;
    let codes: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                s.spawn(move || {
                    (0..50)
                        .map(|i| {
                            service
                                .shorten(&format!("https://host{t}.com/{i}"))
                                .unwrap()
                                .code
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<&String> = codes.iter().collect();
    assert_eq!(unique.len(), 400);
    assert_eq!(repo.link_count(), 400);

    let stats = StatsService::new(repo);
    let top = stats.top_domains(100);
    assert_eq!(top.len(), 8);
    assert!(top.iter().all(|d| d.count == 50));
}

#[test]
fn test_concurrent_shorten_of_same_url_counts_once() {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let service = LinkService::new(repo.clone(), DigestCodeGenerator, "http://localhost:8080");

    let service = &service;
    let codes: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| s.spawn(move || service.shorten("https://example.com").unwrap().code))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(codes.iter().all(|c| c == "yYTQaq--"));
    assert_eq!(repo.link_count(), 1);
    assert_eq!(repo.domain_counts().get("example.com"), Some(&1));
}
