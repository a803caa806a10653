use crate::catalog::Catalog;
use crate::domain::filter::{AGE_BUCKETS, FilterCriteria};
use crate::dto::catalog::{CatalogPageData, FilterOptions, PuppyCard, SelectedFilters};
use crate::pagination::{Paginated, Paginator};

/// Builds the catalog page for the given filters and page position.
pub fn load_catalog_page(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    paginator: &Paginator,
) -> CatalogPageData {
    let cards: Vec<PuppyCard> = catalog
        .filter(criteria)
        .into_iter()
        .map(PuppyCard::from)
        .collect();

    let puppies = Paginated::new(&cards, paginator);

    CatalogPageData {
        no_results: cards.is_empty(),
        puppies,
        filters: FilterOptions {
            breeds: catalog.breeds().into_iter().map(str::to_string).collect(),
            genders: catalog.genders().into_iter().map(str::to_string).collect(),
            age_buckets: AGE_BUCKETS.to_vec(),
        },
        selected: SelectedFilters::from(criteria),
    }
}

/// Applies new filters: the page position restarts at the first page.
pub fn apply_filters(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    paginator: &mut Paginator,
) -> CatalogPageData {
    paginator.reset();
    let page = load_catalog_page(catalog, criteria, paginator);
    log::info!(
        "Filters applied (breed={:?}, gender={:?}, age={:?}): {} match(es)",
        criteria.breed.selected(),
        criteria.gender.selected(),
        criteria.age.selected(),
        page.puppies.total
    );
    page
}

/// Moves to `page` within the filtered results and builds that page.
pub fn change_page(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    paginator: &mut Paginator,
    page: usize,
) -> CatalogPageData {
    let matching = catalog.filter(criteria).len();
    paginator.go_to(page, matching);
    load_catalog_page(catalog, criteria, paginator)
}
