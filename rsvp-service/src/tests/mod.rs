mod intention_handlers_test;
