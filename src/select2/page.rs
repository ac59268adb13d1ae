//! Page slicing for queryset-backed views.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page number {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("page number {0} is less than 1")]
    LessThanOne(i64),
    #[error("page {requested} contains no results (last page is {last})")]
    Empty { requested: usize, last: usize },
}

/// Position of the current page, as far as the renderer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: usize,
    pub has_next: bool,
}

/// One slice of a result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub object_list: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            number: self.number,
            has_next: self.has_next(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: usize,
}

impl Paginator {
    /// `per_page` is clamped to at least one.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for `count` items. The first page always exists, even
    /// when empty.
    pub fn num_pages(&self, count: usize) -> usize {
        count.div_ceil(self.per_page).max(1)
    }

    /// Resolve a raw page parameter: absent means 1, `last` means the final page.
    pub fn validate(&self, raw: Option<&str>, count: usize) -> Result<usize, PageError> {
        let num_pages = self.num_pages(count);
        let number = match raw.map(str::trim) {
            None | Some("") => 1,
            Some("last") => num_pages,
            Some(raw) => {
                let parsed: i64 = raw
                    .parse()
                    .map_err(|_| PageError::NotAnInteger(raw.to_owned()))?;
                if parsed < 1 {
                    return Err(PageError::LessThanOne(parsed));
                }
                usize::try_from(parsed).unwrap_or(usize::MAX)
            }
        };

        if number > num_pages {
            return Err(PageError::Empty {
                requested: number,
                last: num_pages,
            });
        }
        Ok(number)
    }

    /// Slice `items` down to the requested page.
    pub fn page<T>(&self, items: Vec<T>, raw: Option<&str>) -> Result<Page<T>, PageError> {
        let count = items.len();
        let number = self.validate(raw, count)?;
        let start = (number - 1) * self.per_page;
        let object_list = items.into_iter().skip(start).take(self.per_page).collect();
        Ok(Page {
            object_list,
            number,
            num_pages: self.num_pages(count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_by_default() {
        let page = Paginator::new(10).page(numbers(25), None).unwrap();
        assert_eq!(page.number, 1);
        assert_eq!(page.object_list, numbers(10));
        assert!(page.has_next());
    }

    #[test]
    fn last_page_is_partial_and_final() {
        let page = Paginator::new(10).page(numbers(25), Some("3")).unwrap();
        assert_eq!(page.object_list, vec![21, 22, 23, 24, 25]);
        assert!(!page.has_next());
    }

    #[test]
    fn last_keyword_resolves_to_final_page() {
        let page = Paginator::new(10).page(numbers(20), Some("last")).unwrap();
        assert_eq!(page.number, 2);
    }

    #[test]
    fn empty_first_page_is_allowed() {
        let page = Paginator::new(10).page(Vec::<usize>::new(), None).unwrap();
        assert_eq!(page.number, 1);
        assert!(page.object_list.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let paginator = Paginator::new(10);
        assert_eq!(
            paginator.validate(Some("two"), 30),
            Err(PageError::NotAnInteger("two".into()))
        );
        assert_eq!(paginator.validate(Some("0"), 30), Err(PageError::LessThanOne(0)));
        assert_eq!(
            paginator.validate(Some("4"), 30),
            Err(PageError::Empty {
                requested: 4,
                last: 3
            })
        );
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(Paginator::new(0).per_page(), 1);
    }
}
