//! GraphQL Documents
//!
//! Query and mutation text sent to the server.

/// Selection set shared by every operation returning a full dream
macro_rules! dream_fields {
    () => {
        "id
        slug
        title
        summary
        description
        minGoal
        maxGoal
        minGoalGrants
        maxGoalGrants
        currentNumberOfGrants
        approved
        published
        favorite
        numberOfComments
        cocreators { id user { id name } }
        images { small large }
        budgetItems { description min max }"
    };
}

macro_rules! current_user_fields {
    () => {
        "currentUser { id name membership { id isAdmin } }"
    };
}

pub const TOGGLE_FAVORITE: &str = "
mutation ToggleFavoriteMutation($dreamId: ID!) {
  toggleFavorite(dreamId: $dreamId) {
    id
    favorite
  }
}";

pub const CREATE_DREAM: &str = concat!(
    "
mutation CreateDream(
  $eventId: ID!
  $title: String!
  $slug: String!
  $description: String
  $summary: String
  $images: [ImageInput]
  $minGoal: Int
  $maxGoal: Int
  $budgetItems: [BudgetItemInput]
) {
  createDream(
    eventId: $eventId
    title: $title
    slug: $slug
    description: $description
    summary: $summary
    images: $images
    minGoal: $minGoal
    maxGoal: $maxGoal
    budgetItems: $budgetItems
  ) {
    ",
    dream_fields!(),
    "
    comments { id content createdAt author { id name avatar } }
  }
}"
);

pub const EDIT_DREAM: &str = concat!(
    "
mutation EditDream(
  $dreamId: ID!
  $title: String!
  $slug: String!
  $description: String
  $summary: String
  $images: [ImageInput]
  $minGoal: Int
  $maxGoal: Int
  $budgetItems: [BudgetItemInput]
) {
  editDream(
    dreamId: $dreamId
    title: $title
    slug: $slug
    description: $description
    summary: $summary
    images: $images
    minGoal: $minGoal
    maxGoal: $maxGoal
    budgetItems: $budgetItems
  ) {
    ",
    dream_fields!(),
    "
    comments { id content createdAt author { id name avatar } }
  }
}"
);

pub const EVENT_PAGE: &str = concat!(
    "
query EventPage($slug: String!) {
  event(slug: $slug) {
    id
    slug
    title
    dreams {
      ",
    dream_fields!(),
    "
    }
  }
  ",
    current_user_fields!(),
    "
}"
);

pub const DREAM_PAGE: &str = concat!(
    "
query DreamPage($eventSlug: String!, $slug: String!) {
  event(slug: $eventSlug) {
    id
    slug
    title
  }
  dream(eventSlug: $eventSlug, slug: $slug) {
    ",
    dream_fields!(),
    "
    comments { id content createdAt author { id name avatar } }
  }
  ",
    current_user_fields!(),
    "
}"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_select_returned_slug() {
        for document in [CREATE_DREAM, EDIT_DREAM] {
            assert!(document.contains("slug\n"));
            assert!(document.contains("budgetItems { description min max }"));
        }
    }

    #[test]
    fn test_queries_never_request_type_tags() {
        for document in [TOGGLE_FAVORITE, CREATE_DREAM, EDIT_DREAM, EVENT_PAGE, DREAM_PAGE] {
            assert!(!document.contains("__typename"));
        }
    }
}
