use crate::content::Post;
use crate::content::frontmatter::parse_date;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 单个年份下的文章
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup<'a> {
    pub year: String,
    pub posts: Vec<&'a Post>,
}

/// 年份分组之间的顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearOrder {
    /// 按年份在输入中首次出现的顺序
    #[default]
    FirstSeen,
    Descending,
    Ascending,
}

/// 同一年份内文章的顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOrder {
    /// 输入遍历顺序的逆序。输入为新到旧时，组内结果为旧到新
    #[default]
    Reversed,
    NewestFirst,
    OldestFirst,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YearOptions {
    pub year_order: YearOrder,
    pub post_order: PostOrder,
}

/// 取日期字符串第一个 `-` 之前的部分作为年份，没有 `-` 时返回整个字符串
pub fn year_of(date: &str) -> &str {
    date.split('-').next().unwrap_or(date)
}

/// 按发布年份对文章分组
pub fn list_posts_by_years<'a>(posts: &'a [Post], options: &YearOptions) -> Vec<YearGroup<'a>> {
    let mut by_year: IndexMap<&str, Vec<&'a Post>> = IndexMap::new();
    for post in posts {
        by_year.entry(year_of(&post.date)).or_default().push(post);
    }

    let mut groups: Vec<YearGroup<'a>> = by_year
        .into_iter()
        .map(|(year, mut posts)| {
            match options.post_order {
                PostOrder::Reversed => posts.reverse(),
                PostOrder::NewestFirst => posts.sort_by(|a, b| compare_dates(b, a)),
                PostOrder::OldestFirst => posts.sort_by(|a, b| compare_dates(a, b)),
            }
            YearGroup {
                year: year.to_string(),
                posts,
            }
        })
        .collect();

    match options.year_order {
        YearOrder::FirstSeen => {}
        YearOrder::Descending => groups.sort_by(|a, b| b.year.cmp(&a.year)),
        YearOrder::Ascending => groups.sort_by(|a, b| a.year.cmp(&b.year)),
    }

    groups
}

/// 优先按解析后的时间比较，无法解析的日期退化为字符串比较
fn compare_dates(a: &Post, b: &Post) -> Ordering {
    let key = |p: &Post| parse_date(&p.date).ok();
    key(a).cmp(&key(b)).then_with(|| a.date.cmp(&b.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::fixtures::post;

    fn titles(group: &YearGroup<'_>) -> Vec<String> {
        group.posts.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn year_is_prefix_before_first_dash() {
        assert_eq!(year_of("2022-05-01"), "2022");
        assert_eq!(year_of("2022-05-01T10:00:00Z"), "2022");
        assert_eq!(year_of("20220501"), "20220501");
        assert_eq!(year_of(""), "");
    }

    #[test]
    fn post_lands_in_its_year() {
        let posts = vec![post("A", "2022-05-01", &[])];
        let groups = list_posts_by_years(&posts, &YearOptions::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].year, "2022");
    }

    #[test]
    fn default_order_reverses_traversal_within_year() {
        let posts = vec![
            post("C", "2023-09-01", &[]),
            post("B", "2023-06-01", &[]),
            post("Old", "2021-01-01", &[]),
            post("A", "2023-01-10", &[]),
        ];
        let groups = list_posts_by_years(&posts, &YearOptions::default());

        assert_eq!(groups.iter().map(|g| g.year.as_str()).collect::<Vec<_>>(), ["2023", "2021"]);
        assert_eq!(titles(&groups[0]), ["A", "B", "C"]);
        assert_eq!(titles(&groups[1]), ["Old"]);
    }

    #[test]
    fn explicit_sort_orders_by_date() {
        let posts = vec![
            post("Mid", "2023-06-01", &[]),
            post("Early", "2023-01-10", &[]),
            post("Late", "2023-09-01", &[]),
        ];
        let newest = YearOptions {
            post_order: PostOrder::NewestFirst,
            ..Default::default()
        };
        let oldest = YearOptions {
            post_order: PostOrder::OldestFirst,
            ..Default::default()
        };

        assert_eq!(titles(&list_posts_by_years(&posts, &newest)[0]), ["Late", "Mid", "Early"]);
        assert_eq!(titles(&list_posts_by_years(&posts, &oldest)[0]), ["Early", "Mid", "Late"]);
    }

    #[test]
    fn year_groups_can_be_sorted() {
        let posts = vec![
            post("a", "2021-01-01", &[]),
            post("b", "2023-01-01", &[]),
            post("c", "2022-01-01", &[]),
        ];
        let options = YearOptions {
            year_order: YearOrder::Descending,
            ..Default::default()
        };
        let groups = list_posts_by_years(&posts, &options);
        assert_eq!(groups.iter().map(|g| g.year.as_str()).collect::<Vec<_>>(), ["2023", "2022", "2021"]);
    }

    #[test]
    fn malformed_date_forms_its_own_bucket() {
        let posts = vec![post("a", "someday", &[]), post("b", "2020-02-02", &[])];
        let groups = list_posts_by_years(&posts, &YearOptions::default());
        assert_eq!(groups[0].year, "someday");
        assert_eq!(groups[1].year, "2020");
    }

    #[test]
    fn every_post_appears_exactly_once() {
        let posts: Vec<Post> = (0..40)
            .map(|i| {
                let date = format!("{}-{:02}-01", 2015 + i % 7, 1 + i % 12);
                post(&format!("p{i}"), &date, &[])
            })
            .collect();

        for post_order in [PostOrder::Reversed, PostOrder::NewestFirst, PostOrder::OldestFirst] {
            let options = YearOptions {
                post_order,
                ..Default::default()
            };
            let groups = list_posts_by_years(&posts, &options);
            let mut seen: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.posts.iter().map(|p| p.title.as_str()))
                .collect();
            seen.sort_unstable();
            let mut expected: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(list_posts_by_years(&[], &YearOptions::default()).is_empty());
    }
}
