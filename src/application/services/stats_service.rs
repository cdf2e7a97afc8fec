//! Domain statistics service.

use std::sync::Arc;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::UrlRepository;

/// Service for reading aggregated shortening statistics.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns at most `limit` domains with the highest counts.
    ///
    /// Works on a single snapshot of the counters. Results are ordered by
    /// count descending; equal counts are ordered by domain name ascending so
    /// the output is deterministic.
    pub fn top_domains(&self, limit: usize) -> Vec<DomainCount> {
        let mut domains: Vec<DomainCount> = self
            .repository
            .domain_counts()
            .into_iter()
            .map(|(domain, count)| DomainCount::new(domain, count))
            .collect();

        domains.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        });
        domains.truncate(limit);

        domains
    }

    /// Number of stored short links.
    pub fn link_count(&self) -> usize {
        self.repository.link_count()
    }

    /// Number of distinct domains seen.
    pub fn domain_count(&self) -> usize {
        self.repository.domain_counts().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use std::collections::HashMap;

    fn service_with_counts(counts: &[(&str, u64)]) -> StatsService<MockUrlRepository> {
        let snapshot: HashMap<String, u64> = counts
            .iter()
            .map(|(domain, count)| (domain.to_string(), *count))
            .collect();

        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_domain_counts()
            .returning(move || snapshot.clone());

        StatsService::new(Arc::new(mock_repo))
    }

    #[test]
    fn test_top_domains_ordering() {
        let service = service_with_counts(&[("a.com", 3), ("b.com", 1), ("c.com", 2)]);

        let top = service.top_domains(2);

        assert_eq!(
            top,
            vec![DomainCount::new("a.com", 3), DomainCount::new("c.com", 2)]
        );
    }

    #[test]
    fn test_top_domains_fewer_than_limit() {
        let service = service_with_counts(&[("a.com", 1)]);

        let top = service.top_domains(3);

        assert_eq!(top, vec![DomainCount::new("a.com", 1)]);
    }

    #[test]
    fn test_top_domains_empty() {
        let service = service_with_counts(&[]);

        assert!(service.top_domains(3).is_empty());
    }

    #[test]
    fn test_top_domains_zero_limit() {
        let service = service_with_counts(&[("a.com", 5)]);

        assert!(service.top_domains(0).is_empty());
    }

    #[test]
    fn test_top_domains_tie_break_by_name() {
        let service =
            service_with_counts(&[("zeta.com", 2), ("alpha.com", 2), ("mid.com", 2), ("top.com", 9)]);

        let top = service.top_domains(3);

        assert_eq!(
            top,
            vec![
                DomainCount::new("top.com", 9),
                DomainCount::new("alpha.com", 2),
                DomainCount::new("mid.com", 2),
            ]
        );
    }

    #[test]
    fn test_counts_pass_through() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_link_count().times(1).return_const(7usize);
        mock_repo
            .expect_domain_counts()
            .times(1)
            .returning(|| HashMap::from([("a.com".to_string(), 4), ("b.com".to_string(), 3)]));

        let service = StatsService::new(Arc::new(mock_repo));

        assert_eq!(service.link_count(), 7);
        assert_eq!(service.domain_count(), 2);
    }
}
