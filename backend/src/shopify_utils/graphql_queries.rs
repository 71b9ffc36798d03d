//! GraphQL documents sent to the storefront API.

const SEO_FRAGMENT: &str = "
  fragment seo on SEO {
    description
    title
  }
";

const COLLECTION_FRAGMENT: &str = "
  fragment collection on Collection {
    handle
    title
    description
    seo {
      ...seo
    }
    updatedAt
  }
";

const PRODUCT_FRAGMENT: &str = "
  fragment product on Product {
    id
    handle
    title
    availableForSale
    featuredImage {
      url
      altText
      width
      height
    }
    priceRange {
      maxVariantPrice {
        amount
        currencyCode
      }
      minVariantPrice {
        amount
        currencyCode
      }
    }
  }
";

pub fn get_collection_query() -> String {
    format!(
        "
  query getCollection($handle: String!) {{
    collection(handle: $handle) {{
      ...collection
    }}
  }}
  {COLLECTION_FRAGMENT}
  {SEO_FRAGMENT}"
    )
}

pub fn get_collections_query() -> String {
    format!(
        "
  query getCollections {{
    collections(first: 100, sortKey: TITLE) {{
      edges {{
        node {{
          ...collection
        }}
      }}
    }}
  }}
  {COLLECTION_FRAGMENT}
  {SEO_FRAGMENT}"
    )
}

pub fn get_collection_products_filtered_query() -> String {
    format!(
        "
  query getCollectionProductsFiltered(
    $handle: String!
    $sortKey: ProductCollectionSortKeys
    $reverse: Boolean
    $filters: [ProductFilter!]
    $first: Int!
  ) {{
    collection(handle: $handle) {{
      products(sortKey: $sortKey, reverse: $reverse, filters: $filters, first: $first) {{
        nodes {{
          ...product
        }}
      }}
    }}
  }}
  {PRODUCT_FRAGMENT}"
    )
}

pub const GET_COLLECTION_FILTERS_QUERY: &str = "
  query getCollectionProductsFilters($handle: String!, $filters: [ProductFilter!]) {
    collection(handle: $handle) {
      products(first: 0, filters: $filters) {
        filters {
          type
          label
          id
          presentation
          values {
            count
            id
            label
            input
          }
        }
      }
    }
  }
";
