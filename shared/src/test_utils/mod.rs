pub mod dynamo_test_utils;
pub mod http_test_utils;
pub mod mock_guest_store;
pub mod mock_intention_store;
pub mod mock_rsvp_store;
pub mod test_logging;
