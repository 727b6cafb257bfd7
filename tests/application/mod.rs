mod study_service_test;
