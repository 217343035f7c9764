mod test_fixture_files;
