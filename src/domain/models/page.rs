//! 페이지 단위 조회 결과
//!
//! Spring Data의 `Page`와 `Slice`에 대응합니다. `Page`는 전체 건수를 함께
//! 세고, `Slice`는 다음 페이지 존재 여부만 확인합니다.

use serde::{Deserialize, Serialize};

/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// 페이지 요청 (0부터 시작)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        }
    }

    /// 건너뛸 문서 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 전체 건수를 포함한 페이지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// 다음 페이지 존재 여부만 아는 조각
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub has_next: bool,
}

impl<T> Slice<T> {
    /// `size + 1`개까지 조회한 결과로 슬라이스를 만듭니다.
    ///
    /// 초과분이 있으면 잘라내고 `has_next`를 true로 설정합니다.
    pub fn from_overfetched(mut content: Vec<T>, request: PageRequest) -> Self {
        let limit = usize::try_from(request.size).unwrap_or(usize::MAX);
        let has_next = content.len() > limit;
        content.truncate(limit);

        Self {
            content,
            page: request.page,
            size: request.size,
            has_next,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Slice<U> {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            has_next: self.has_next,
        }
    }
}
