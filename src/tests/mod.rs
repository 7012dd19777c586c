mod test_run_project;
